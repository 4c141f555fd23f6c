//! A from/to year selection

use serde::{Deserialize, Serialize};

/// The pair of years a conversion runs between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearPair {
    pub from: i32,
    pub to: i32,
}

/// Direction of a conversion through time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `to` is later than `from`: rates compound
    Forward,
    /// `to` is earlier than `from`: rates are divided out
    Backward,
    /// Same year
    Unchanged,
}

impl YearPair {
    pub const fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    /// The same pair with `from` and `to` exchanged
    pub const fn swapped(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    pub fn direction(&self) -> Direction {
        match self.to.cmp(&self.from) {
            std::cmp::Ordering::Greater => Direction::Forward,
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::Unchanged,
        }
    }

    /// Earlier and later year, in that order
    pub fn span(&self) -> (i32, i32) {
        (self.from.min(self.to), self.from.max(self.to))
    }
}
