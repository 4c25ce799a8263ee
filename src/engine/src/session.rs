use facelets::{
    CubeState, CubieSides, DecodeError, EncodeError, FaceletString, MoveToken, OddLengthPolicy,
    decode_moves, encode,
};
use log::{debug, info, warn};
use thiserror::Error;

use crate::{EngineError, RawSolution, SolvingEngine};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No cube has been loaded into the session")]
    NotInitialized,
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("The solving engine returned an unreadable move string: {0}")]
    Decode(#[from] DecodeError),
}

/// The result of asking the engine for a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The moves that solve the cube; empty when it already was solved.
    Solved(Vec<MoveToken>),
    /// The engine reported a non-zero status.
    Failed { status: i32 },
}

impl SolveOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }

    /// The moves as a flat list; a failure reads as no moves.
    pub fn moves(&self) -> &[MoveToken] {
        match self {
            SolveOutcome::Solved(moves) => moves,
            SolveOutcome::Failed { .. } => &[],
        }
    }
}

/// One solving session: the cube being worked on and the engine that works
/// on it.
pub struct Session<E> {
    state: CubeState,
    engine: E,
    odd_length: OddLengthPolicy,
}

impl<E: SolvingEngine> Session<E> {
    pub fn new(engine: E) -> Self {
        Session {
            state: CubeState::new(),
            engine,
            odd_length: OddLengthPolicy::default(),
        }
    }

    pub fn with_odd_length_policy(mut self, policy: OddLengthPolicy) -> Self {
        self.odd_length = policy;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    /// Resets the session to a solved cube.
    pub fn init(&mut self) -> bool {
        self.state.replace(FaceletString::solved());
        self.state.is_initialized()
    }

    /// Replaces the session's cube. On error the previous cube is kept.
    pub fn load_cube<C: CubieSides>(&mut self, cubies: &[C]) -> Result<(), EncodeError> {
        let facelets = encode(cubies)?;
        self.load_facelets(facelets);
        Ok(())
    }

    pub fn load_facelets(&mut self, facelets: FaceletString) {
        debug!(target: "session", "Loaded cube: facelets={facelets}");
        self.state.replace(facelets);
    }

    /// Asks the engine whether the loaded cube is solved. Without a loaded
    /// cube the engine is not consulted.
    pub fn is_solved(&mut self) -> bool {
        match self.state.facelets() {
            Some(facelets) => self.engine.is_solved(facelets),
            None => false,
        }
    }

    pub fn solve(&mut self) -> Result<SolveOutcome, SessionError> {
        let Some(facelets) = self.state.facelets() else {
            return Err(SessionError::NotInitialized);
        };

        debug!(target: "session", "Solving: facelets={facelets}");
        let RawSolution { status, moves } = self.engine.solve(facelets)?;

        if status != 0 {
            warn!(target: "session", "Solving engine gave up: status={status}");
            return Ok(SolveOutcome::Failed { status });
        }

        let moves = decode_moves(&moves, self.odd_length)?;
        info!(target: "session", "Solved: move_count={}", moves.len());

        Ok(SolveOutcome::Solved(moves))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(RawSolution);

    impl SolvingEngine for Fixed {
        fn solve(&mut self, _: &FaceletString) -> Result<RawSolution, EngineError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn init_loads_the_solved_cube() {
        let mut session = Session::new(Fixed(RawSolution::default()));
        assert!(!session.is_initialized());

        assert!(session.init());
        assert_eq!(session.state().facelets(), Some(&FaceletString::solved()));
        assert!(session.is_solved());
    }

    #[test]
    fn outcome_views() {
        let solved = SolveOutcome::Solved(vec!["UL".parse().unwrap()]);
        assert!(solved.succeeded());
        assert_eq!(solved.moves(), ["UL"]);

        let failed = SolveOutcome::Failed { status: 1 };
        assert!(!failed.succeeded());
        assert!(failed.moves().is_empty());
    }

    #[test]
    fn odd_output_follows_the_policy() {
        let mut session = Session::new(Fixed(RawSolution::solved("ULU")));
        session.init();
        assert!(matches!(
            session.solve(),
            Err(SessionError::Decode(DecodeError::OddLength { len: 3 }))
        ));

        let mut session = Session::new(Fixed(RawSolution::solved("ULU")))
            .with_odd_length_policy(OddLengthPolicy::Truncate);
        session.init();
        assert_eq!(session.solve().unwrap().moves(), ["UL"]);
    }
}
