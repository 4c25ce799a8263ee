use std::{fmt, iter::FusedIterator, slice::ChunksExact, str::FromStr};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveTokenError {
    #[error("Invalid move token {0:?}, expected exactly two ASCII characters")]
    WrongWidth(String),
    #[error("Unknown turn {0:?}")]
    UnknownTurn(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Move string has odd length {len}; every move is two characters")]
    OddLength { len: usize },
    #[error("Move string contains non-ASCII characters")]
    NonAscii,
}

/// What to do with a move string whose length is not a multiple of two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OddLengthPolicy {
    /// Refuse the whole string
    #[default]
    Reject,
    /// Drop the dangling character and log a warning
    Truncate,
}

/// One move as reported by the solving engine: a face or axis designator
/// followed by a modifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveToken(pub(crate) [u8; 2]);

impl MoveToken {
    pub fn new(designator: char, modifier: char) -> Result<Self, MoveTokenError> {
        match (u8::try_from(designator), u8::try_from(modifier)) {
            (Ok(a), Ok(b)) if a.is_ascii() && b.is_ascii() => Ok(MoveToken([a, b])),
            _ => Err(MoveTokenError::WrongWidth(format!("{designator}{modifier}"))),
        }
    }

    pub fn designator(self) -> char {
        char::from(self.0[0])
    }

    pub fn modifier(self) -> char {
        char::from(self.0[1])
    }
}

impl FromStr for MoveToken {
    type Err = MoveTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[a, b] if a.is_ascii() && b.is_ascii() => Ok(MoveToken([a, b])),
            _ => Err(MoveTokenError::WrongWidth(s.to_owned())),
        }
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.designator(), self.modifier())
    }
}

impl fmt::Debug for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveToken({self})")
    }
}

impl PartialEq<str> for MoveToken {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for MoveToken {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// Lazily splits a raw move string into two-character tokens.
///
/// Clone it before consuming to walk the same string twice.
#[derive(Debug, Clone)]
pub struct MoveTokens<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> MoveTokens<'a> {
    pub fn new(raw: &'a str, policy: OddLengthPolicy) -> Result<Self, DecodeError> {
        if !raw.is_ascii() {
            return Err(DecodeError::NonAscii);
        }

        if raw.len() % 2 != 0 {
            match policy {
                OddLengthPolicy::Reject => return Err(DecodeError::OddLength { len: raw.len() }),
                OddLengthPolicy::Truncate => warn!(
                    target: "decode",
                    "Dropping trailing {:?} from odd-length move string: len={}",
                    &raw[raw.len() - 1..],
                    raw.len()
                ),
            }
        }

        Ok(MoveTokens {
            chunks: raw.as_bytes().chunks_exact(2),
        })
    }
}

impl Iterator for MoveTokens<'_> {
    type Item = MoveToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(|pair| MoveToken([pair[0], pair[1]]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for MoveTokens<'_> {}

impl FusedIterator for MoveTokens<'_> {}

/// Splits a whole raw move string at once.
pub fn decode_moves(raw: &str, policy: OddLengthPolicy) -> Result<Vec<MoveToken>, DecodeError> {
    Ok(MoveTokens::new(raw, policy)?.collect())
}
