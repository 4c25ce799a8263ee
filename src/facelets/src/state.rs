use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{FACELET_COUNT, FACELETS_PER_FACE, Face};

pub const SOLVED_FACELETS: &str = "111111111222222222333333333444444444555555555666666666";

/// Facelet values run from 1 to 6; 0 is reserved for "no sticker".
pub(crate) fn is_valid_color(value: u8) -> bool {
    (1..=6).contains(&value)
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FaceletError {
    #[error("Invalid facelet count, expected {expected} facelets but got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("Invalid facelet {character:?} at slot {slot}, expected a digit between 1 and 6")]
    InvalidColor { slot: usize, character: char },
}

/// A complete, validated facelet string: 54 values in `1..=6`, ordered
/// U F R B L D.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceletString([u8; FACELET_COUNT]);

impl FaceletString {
    pub fn solved() -> Self {
        FaceletString(std::array::from_fn(|slot| {
            Face::ALL[slot / FACELETS_PER_FACE].solved_color()
        }))
    }

    /// Callers must have checked every value with `is_valid_color`.
    pub(crate) fn from_values(values: [u8; FACELET_COUNT]) -> Self {
        debug_assert!(values.iter().all(|&v| is_valid_color(v)));
        FaceletString(values)
    }

    pub fn values(&self) -> &[u8; FACELET_COUNT] {
        &self.0
    }

    pub fn value(&self, slot: usize) -> Option<u8> {
        self.0.get(slot).copied()
    }

    pub fn face(&self, face: Face) -> &[u8] {
        let start = face.index() * FACELETS_PER_FACE;
        &self.0[start..start + FACELETS_PER_FACE]
    }

    /// Every facelet matches the centre of its face.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let facelets = self.face(face);
            facelets.iter().all(|&v| v == facelets[4])
        })
    }
}

impl FromStr for FaceletString {
    type Err = FaceletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actual = s.chars().count();
        if actual != FACELET_COUNT {
            return Err(FaceletError::WrongLength {
                expected: FACELET_COUNT,
                actual,
            });
        }

        let mut values = [0; FACELET_COUNT];
        for (slot, character) in s.chars().enumerate() {
            values[slot] = character
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .filter(|&v| is_valid_color(v))
                .ok_or(FaceletError::InvalidColor { slot, character })?;
        }

        Ok(FaceletString(values))
    }
}

impl fmt::Display for FaceletString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &value in &self.0 {
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for FaceletString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FaceletString({self})")
    }
}

/// The cube a session works on. Only an initialized state may be handed to a
/// solving engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CubeState {
    facelets: Option<FaceletString>,
}

impl CubeState {
    pub fn new() -> Self {
        CubeState::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.facelets.is_some()
    }

    pub fn facelets(&self) -> Option<&FaceletString> {
        self.facelets.as_ref()
    }

    pub fn replace(&mut self, facelets: FaceletString) {
        self.facelets = Some(facelets);
    }

    pub fn reset(&mut self) {
        self.facelets = None;
    }
}

impl From<FaceletString> for CubeState {
    fn from(facelets: FaceletString) -> Self {
        CubeState {
            facelets: Some(facelets),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_string() {
        let solved = FaceletString::solved();

        assert_eq!(solved.to_string(), SOLVED_FACELETS);
        assert_eq!(SOLVED_FACELETS.parse::<FaceletString>(), Ok(solved));
        assert!(solved.is_solved());
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "123".parse::<FaceletString>(),
            Err(FaceletError::WrongLength {
                expected: FACELET_COUNT,
                actual: 3
            })
        );

        let mut zero = SOLVED_FACELETS.to_owned();
        zero.replace_range(10..11, "0");
        assert_eq!(
            zero.parse::<FaceletString>(),
            Err(FaceletError::InvalidColor {
                slot: 10,
                character: '0'
            })
        );

        let mut letter = SOLVED_FACELETS.to_owned();
        letter.replace_range(53..54, "D");
        assert!(matches!(
            letter.parse::<FaceletString>(),
            Err(FaceletError::InvalidColor { slot: 53, .. })
        ));
    }

    #[test]
    fn swapped_facelets_are_not_solved() {
        let mut s = SOLVED_FACELETS.to_owned();
        s.replace_range(0..1, "2");
        s.replace_range(9..10, "1");

        let facelets: FaceletString = s.parse().unwrap();
        assert!(!facelets.is_solved());
        assert_eq!(facelets.face(Face::U)[0], 2);
        assert_eq!(facelets.value(9), Some(1));
        assert_eq!(facelets.value(54), None);
    }

    #[test]
    fn cube_state_lifecycle() {
        let mut state = CubeState::new();
        assert!(!state.is_initialized());
        assert_eq!(state.facelets(), None);

        state.replace(FaceletString::solved());
        assert!(state.is_initialized());
        assert_eq!(state.facelets(), Some(&FaceletString::solved()));

        state.reset();
        assert!(!state.is_initialized());
    }
}
