#![warn(clippy::pedantic)]

use std::io;

use facelets::FaceletString;
use thiserror::Error;

mod command;
pub mod config;
mod session;

pub use command::CommandEngine;
pub use session::{Session, SessionError, SolveOutcome};

/// What a solving engine hands back for one facelet string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawSolution {
    /// Zero on success; anything else means the engine gave up.
    pub status: i32,
    /// Two characters per move, no separators.
    pub moves: String,
}

impl RawSolution {
    pub fn solved(moves: impl Into<String>) -> Self {
        RawSolution {
            status: 0,
            moves: moves.into(),
        }
    }

    pub fn failed(status: i32) -> Self {
        RawSolution {
            status,
            moves: String::new(),
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to start the solving engine `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to talk to the solving engine: {0}")]
    Io(#[from] io::Error),
}

/// The solver behind a session. How it searches is its own business; it only
/// reports a status and a raw move string.
pub trait SolvingEngine {
    fn solve(&mut self, facelets: &FaceletString) -> Result<RawSolution, EngineError>;

    fn is_solved(&mut self, facelets: &FaceletString) -> bool {
        facelets.is_solved()
    }
}

impl<E: SolvingEngine + ?Sized> SolvingEngine for Box<E> {
    fn solve(&mut self, facelets: &FaceletString) -> Result<RawSolution, EngineError> {
        (**self).solve(facelets)
    }

    fn is_solved(&mut self, facelets: &FaceletString) -> bool {
        (**self).is_solved(facelets)
    }
}
