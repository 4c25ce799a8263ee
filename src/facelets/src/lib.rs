#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Translation between a 27-cubie description of a 3x3x3 cube and the
//! 54-facelet string a solving engine consumes, plus the tokenizer for the
//! engine's move output.

use std::{fmt, str::FromStr};

mod cubie_cube;
mod encoder;
mod index_map;
mod moves;
mod state;

pub use cubie_cube::{Axis, CubieCube, Turn};
pub use encoder::{Cubie, CubieSides, EncodeError, decode, encode};
pub use index_map::{FaceletIndexMap, FaceletSource};
pub use moves::{
    DecodeError, MoveToken, MoveTokenError, MoveTokens, OddLengthPolicy, decode_moves,
};
pub use state::{CubeState, FaceletError, FaceletString, SOLVED_FACELETS};

/// Number of spatial cubie positions in a 3x3x3 cube, including the hidden core.
pub const CUBIE_COUNT: usize = 27;
/// Number of facelets on a single face.
pub const FACELETS_PER_FACE: usize = 9;
/// Number of facelets in a facelet string.
pub const FACELET_COUNT: usize = FACELETS_PER_FACE * 6;

/// The six face groups, in the order they appear in a facelet string.
///
/// The orientation slot a cubie is read from for a face group is the face's
/// index, so `Face::F` reads slot 1 of every front-layer cubie.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    /// Top, +Y
    U,
    /// Front, +Z
    F,
    /// Right, +X
    R,
    /// Back, -Z
    B,
    /// Left, -X
    L,
    /// Bottom, -Y
    D,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, F, R, B, L, D];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The colour every facelet of this face carries on a solved cube.
    pub const fn solved_color(self) -> u8 {
        self as u8 + 1
    }

    /// Outward unit normal in world coordinates.
    pub const fn normal(self) -> [i8; 3] {
        match self {
            Face::U => [0, 1, 0],
            Face::F => [0, 0, 1],
            Face::R => [1, 0, 0],
            Face::B => [0, 0, -1],
            Face::L => [-1, 0, 0],
            Face::D => [0, -1, 0],
        }
    }

    /// Whether the cubie at `position` sits in this face's outer layer.
    pub const fn contains_position(self, position: usize) -> bool {
        let x = position % 3;
        let y = (position / 3) % 3;
        let z = position / 9;

        match self {
            Face::U => y == 0,
            Face::D => y == 2,
            Face::F => z == 0,
            Face::B => z == 2,
            Face::L => x == 0,
            Face::R => x == 2,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Face::U),
            "F" => Ok(Face::F),
            "R" => Ok(Face::R),
            "B" => Ok(Face::B),
            "L" => Ok(Face::L),
            "D" => Ok(Face::D),
            _ => Err(()),
        }
    }
}
