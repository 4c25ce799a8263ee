use log::debug;
use thiserror::Error;

use crate::{
    CUBIE_COUNT, FACELET_COUNT, Face, FaceletIndexMap,
    state::{FaceletString, is_valid_color},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Invalid cubie count, expected {expected} cubies but got {actual}")]
    WrongCubieCount { expected: usize, actual: usize },
    #[error("The cubie at position {position} has no orientation value for face {face}")]
    MissingSide { position: usize, face: Face },
    #[error("Invalid value {value} for facelet {slot}, expected a value between 1 and 6")]
    InvalidColor { slot: usize, value: u8 },
}

/// Anything that can report which colour faces a given direction.
///
/// Orientation values are indexed by face group, so `side(Face::R)` is the
/// colour on the cubie's right hand side. Cubies only need to provide the
/// values for faces they actually touch.
pub trait CubieSides {
    fn side(&self, face: Face) -> Option<u8>;
}

impl CubieSides for [u8] {
    fn side(&self, face: Face) -> Option<u8> {
        self.get(face.index()).copied()
    }
}

impl<const N: usize> CubieSides for [u8; N] {
    fn side(&self, face: Face) -> Option<u8> {
        self.as_slice().side(face)
    }
}

impl CubieSides for Vec<u8> {
    fn side(&self, face: Face) -> Option<u8> {
        self.as_slice().side(face)
    }
}

impl<T: CubieSides + ?Sized> CubieSides for &T {
    fn side(&self, face: Face) -> Option<u8> {
        (**self).side(face)
    }
}

/// A cubie with a value for every direction. Directions it does not show
/// carry 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cubie {
    sides: [u8; 6],
}

impl Cubie {
    pub const fn new(sides: [u8; 6]) -> Self {
        Cubie { sides }
    }

    pub const fn solved() -> Self {
        Cubie::new([1, 2, 3, 4, 5, 6])
    }

    pub const fn sides(&self) -> [u8; 6] {
        self.sides
    }
}

impl CubieSides for Cubie {
    fn side(&self, face: Face) -> Option<u8> {
        Some(self.sides[face.index()])
    }
}

/// Builds the facelet string for a cube described cubie by cubie.
///
/// Nothing is returned unless all 54 facelets were read successfully.
pub fn encode<C: CubieSides>(cubies: &[C]) -> Result<FaceletString, EncodeError> {
    if cubies.len() != CUBIE_COUNT {
        return Err(EncodeError::WrongCubieCount {
            expected: CUBIE_COUNT,
            actual: cubies.len(),
        });
    }

    let mut values = [0; FACELET_COUNT];

    for (slot, source) in FaceletIndexMap::cube3().iter().enumerate() {
        let position = source.position();
        let value = cubies[position]
            .side(source.face)
            .ok_or(EncodeError::MissingSide {
                position,
                face: source.face,
            })?;

        if !is_valid_color(value) {
            return Err(EncodeError::InvalidColor { slot, value });
        }

        values[slot] = value;
    }

    let facelets = FaceletString::from_values(values);
    debug!(target: "encode", "Encoded cube: facelets={facelets}");

    Ok(facelets)
}

/// Spreads a facelet string back over the cubies that supply it.
pub fn decode(facelets: &FaceletString) -> [Cubie; CUBIE_COUNT] {
    let mut sides = [[0; 6]; CUBIE_COUNT];

    for (source, &value) in FaceletIndexMap::cube3().iter().zip(facelets.values()) {
        sides[source.position()][source.face.index()] = value;
    }

    sides.map(Cubie::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SOLVED_FACELETS;

    fn solved_cubies() -> Vec<Vec<u8>> {
        vec![vec![1, 2, 3, 4, 5, 6]; CUBIE_COUNT]
    }

    #[test]
    fn solved_cubies_encode_to_solved_string() {
        let facelets = encode(&solved_cubies()).unwrap();
        assert_eq!(facelets.to_string(), SOLVED_FACELETS);

        let arrays = [[1u8, 2, 3, 4, 5, 6]; CUBIE_COUNT];
        assert_eq!(encode(&arrays).unwrap(), facelets);
    }

    #[test]
    fn wrong_cubie_count() {
        for len in [0, 26, 28, 125] {
            let cubies = vec![Cubie::solved(); len];
            assert_eq!(
                encode(&cubies),
                Err(EncodeError::WrongCubieCount {
                    expected: CUBIE_COUNT,
                    actual: len
                })
            );
        }
    }

    #[test]
    fn short_orientation_lists_only_need_the_read_slots() {
        // Position 0 is on U, F and L; L is the fifth slot.
        let mut cubies = solved_cubies();
        cubies[0].truncate(5);
        assert!(encode(&cubies).is_ok());

        cubies[0].truncate(4);
        assert_eq!(
            encode(&cubies),
            Err(EncodeError::MissingSide {
                position: 0,
                face: Face::L
            })
        );

        // The core is never read.
        let mut cubies = solved_cubies();
        cubies[13].clear();
        assert!(encode(&cubies).is_ok());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut cubies = solved_cubies();
        cubies[4][Face::F.index()] = 7;
        // The front centre is slot 9 + 4.
        assert_eq!(
            encode(&cubies),
            Err(EncodeError::InvalidColor { slot: 13, value: 7 })
        );

        let mut cubies = solved_cubies();
        cubies[10][Face::U.index()] = 0;
        assert_eq!(
            encode(&cubies),
            Err(EncodeError::InvalidColor { slot: 4, value: 0 })
        );
    }

    #[test]
    fn values_land_in_the_mapped_slot() {
        let map = FaceletIndexMap::cube3();

        for slot in 0..FACELET_COUNT {
            let source = map.get(slot).unwrap();
            let mut cubies = solved_cubies();
            let marked = if source.face == Face::U { 2 } else { 1 };
            cubies[source.position()][source.face.index()] = marked;

            let facelets = encode(&cubies).unwrap();
            for other in 0..FACELET_COUNT {
                let expected = if other == slot {
                    marked
                } else {
                    SOLVED_FACELETS.as_bytes()[other] - b'0'
                };
                assert_eq!(facelets.value(other), Some(expected), "{slot} {other}");
            }
        }
    }

    #[test]
    fn decode_then_encode_round_trips() {
        let facelets = FaceletString::solved();
        let cubies = decode(&facelets);

        // The core shows nothing.
        assert_eq!(cubies[13].sides(), [0; 6]);
        // A corner shows exactly three colours.
        assert_eq!(cubies[0].sides(), [1, 2, 0, 0, 5, 0]);

        assert_eq!(encode(&cubies).unwrap(), facelets);
    }
}
