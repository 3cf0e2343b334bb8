//! Board coordinates and sliding directions.
//!
//! Rows grow downwards and columns grow to the right, so the top-left cell of
//! the board is `(0, 0)`.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use crate::error::ParseError;

/// A cell address on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: i32,
    pub column: i32,
}

impl Coordinate {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    pub fn is_above(&self, other: &Coordinate) -> bool {
        self.row < other.row
    }

    pub fn is_below(&self, other: &Coordinate) -> bool {
        self.row > other.row
    }

    pub fn is_to_left_of(&self, other: &Coordinate) -> bool {
        self.column < other.column
    }

    pub fn is_to_right_of(&self, other: &Coordinate) -> bool {
        self.column > other.column
    }

    /// True when both row and column are equal.
    pub fn matches(&self, other: &Coordinate) -> bool {
        self == other
    }

    /// The neighbouring cell one unit over in `direction`.
    ///
    /// May leave the board (e.g. a negative row); bounds are the caller's concern.
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        self.offset(direction, 1)
    }

    /// The cell `distance` units over in `direction`.
    #[inline]
    pub fn offset(self, direction: Direction, distance: i32) -> Self {
        let (d_row, d_column) = direction.offset();
        Self {
            row: self.row + d_row * distance,
            column: self.column + d_column * distance,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A single-axis, single-sign unit displacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a stable order used for move generation.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit displacement as `(d_row, d_column)`.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(ParseError::Direction(s.to_string())),
        }
    }
}
