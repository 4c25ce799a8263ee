use std::{fmt, str::FromStr};

use log::debug;

use crate::{CUBIE_COUNT, Cubie, Face, MoveToken, MoveTokenError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    const fn index(self) -> usize {
        self as usize
    }

    /// Faces visited by a positive quarter turn about this axis. Faces on the
    /// axis itself stay put.
    const fn cycle(self) -> [Face; 4] {
        match self {
            Axis::X => [Face::U, Face::F, Face::D, Face::B],
            Axis::Y => [Face::F, Face::R, Face::B, Face::L],
            Axis::Z => [Face::U, Face::L, Face::D, Face::R],
        }
    }
}

/// A quarter turn of one outer layer.
///
/// Names follow a view of the cube from the right (+X) face: `U`/`D` are the
/// top and bottom layers, `L`/`R` the front and back layers (left and right
/// from that view), `F`/`B` the right and left layers. The second letter is
/// the direction: left, right, up, down, clockwise or anticlockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    UL,
    UR,
    DL,
    DR,
    LU,
    LD,
    RU,
    RD,
    FC,
    FA,
    BC,
    BA,
}

impl Turn {
    pub const ALL: [Turn; 12] = {
        use Turn::*;
        [UL, UR, DL, DR, LU, LD, RU, RD, FC, FA, BC, BA]
    };

    pub const fn name(self) -> &'static str {
        match self {
            Turn::UL => "UL",
            Turn::UR => "UR",
            Turn::DL => "DL",
            Turn::DR => "DR",
            Turn::LU => "LU",
            Turn::LD => "LD",
            Turn::RU => "RU",
            Turn::RD => "RD",
            Turn::FC => "FC",
            Turn::FA => "FA",
            Turn::BC => "BC",
            Turn::BA => "BA",
        }
    }

    pub const fn inverse(self) -> Turn {
        match self {
            Turn::UL => Turn::UR,
            Turn::UR => Turn::UL,
            Turn::DL => Turn::DR,
            Turn::DR => Turn::DL,
            Turn::LU => Turn::LD,
            Turn::LD => Turn::LU,
            Turn::RU => Turn::RD,
            Turn::RD => Turn::RU,
            Turn::FC => Turn::FA,
            Turn::FA => Turn::FC,
            Turn::BC => Turn::BA,
            Turn::BA => Turn::BC,
        }
    }

    /// Rotation axis, the world coordinate of the turned layer along that
    /// axis, and the quarter-turn direction (right-hand rule).
    pub const fn geometry(self) -> (Axis, i8, i8) {
        match self {
            Turn::UL => (Axis::Y, 1, -1),
            Turn::UR => (Axis::Y, 1, 1),
            Turn::DL => (Axis::Y, -1, -1),
            Turn::DR => (Axis::Y, -1, 1),
            Turn::LU => (Axis::Z, 1, 1),
            Turn::LD => (Axis::Z, 1, -1),
            Turn::RU => (Axis::Z, -1, 1),
            Turn::RD => (Axis::Z, -1, -1),
            Turn::FC => (Axis::X, 1, -1),
            Turn::FA => (Axis::X, 1, 1),
            Turn::BC => (Axis::X, -1, -1),
            Turn::BA => (Axis::X, -1, 1),
        }
    }

    pub fn token(self) -> MoveToken {
        let name = self.name().as_bytes();
        MoveToken([name[0], name[1]])
    }

    pub fn random(rng: &mut fastrand::Rng) -> Turn {
        Turn::ALL[rng.usize(..Turn::ALL.len())]
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Turn {
    type Err = MoveTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Turn::ALL
            .into_iter()
            .find(|turn| turn.name() == s)
            .ok_or_else(|| MoveTokenError::UnknownTurn(s.to_owned()))
    }
}

impl TryFrom<MoveToken> for Turn {
    type Error = MoveTokenError;

    fn try_from(token: MoveToken) -> Result<Self, Self::Error> {
        token.to_string().parse()
    }
}

fn coords(position: usize) -> [i8; 3] {
    let layer = |c: usize| match c {
        0 => -1,
        1 => 0,
        _ => 1,
    };

    [
        layer(position % 3),
        -layer((position / 3) % 3),
        -layer(position / 9),
    ]
}

fn position([x, y, z]: [i8; 3]) -> usize {
    usize::from(x.abs_diff(-1)) + 3 * usize::from(1i8.abs_diff(y)) + 9 * usize::from(1i8.abs_diff(z))
}

fn rotate([x, y, z]: [i8; 3], axis: Axis, quarter: i8) -> [i8; 3] {
    match (axis, quarter > 0) {
        (Axis::X, true) => [x, -z, y],
        (Axis::X, false) => [x, z, -y],
        (Axis::Y, true) => [z, y, -x],
        (Axis::Y, false) => [-z, y, x],
        (Axis::Z, true) => [-y, x, z],
        (Axis::Z, false) => [y, -x, z],
    }
}

fn rotate_face(face: Face, axis: Axis, quarter: i8) -> Face {
    let cycle = axis.cycle();
    let step = if quarter > 0 { 1 } else { 3 };

    match cycle.iter().position(|&f| f == face) {
        Some(i) => cycle[(i + step) % 4],
        None => face,
    }
}

/// A physical cube made of 27 cubies that can be turned layer by layer.
///
/// Position `i` is `x + 3y + 9z` with `y = 0` the top layer, `z = 0` the
/// front layer and `x = 0` the left layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubieCube {
    cubies: [Cubie; CUBIE_COUNT],
}

impl Default for CubieCube {
    fn default() -> Self {
        CubieCube::solved()
    }
}

impl CubieCube {
    pub fn solved() -> Self {
        CubieCube {
            cubies: [Cubie::solved(); CUBIE_COUNT],
        }
    }

    pub fn cubies(&self) -> &[Cubie; CUBIE_COUNT] {
        &self.cubies
    }

    pub fn turn(&mut self, turn: Turn) {
        let (axis, layer, quarter) = turn.geometry();
        let previous = self.cubies;

        for (from, cubie) in previous.iter().enumerate() {
            let at = coords(from);
            if at[axis.index()] != layer {
                continue;
            }

            let to = position(rotate(at, axis, quarter));
            let old_sides = cubie.sides();
            let mut sides = [0; 6];
            for face in Face::ALL {
                sides[rotate_face(face, axis, quarter).index()] = old_sides[face.index()];
            }

            self.cubies[to] = Cubie::new(sides);
        }
    }

    pub fn apply(&mut self, turns: impl IntoIterator<Item = Turn>) {
        for turn in turns {
            self.turn(turn);
        }
    }

    /// Applies engine output. Nothing is turned unless every token names a
    /// known turn.
    pub fn apply_tokens(&mut self, tokens: &[MoveToken]) -> Result<(), MoveTokenError> {
        let turns = tokens
            .iter()
            .map(|&token| Turn::try_from(token))
            .collect::<Result<Vec<_>, _>>()?;

        self.apply(turns);
        Ok(())
    }

    /// Turns `count` random layers and returns what was turned.
    pub fn scramble(&mut self, rng: &mut fastrand::Rng, count: usize) -> Vec<Turn> {
        let turns: Vec<Turn> = (0..count).map(|_| Turn::random(rng)).collect();
        debug!(target: "scramble", "Scrambling: count={count}");

        self.apply(turns.iter().copied());
        turns
    }
}
