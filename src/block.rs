//! Rectangular blocks and their stable identifiers.
//!
//! A block is identified by the coordinate of its top-left cell, but it can be
//! wider or taller than one cell. Every cell it covers is taken into account
//! when comparing it with other blocks.

use std::fmt;
use std::ops::Range;

use crate::geometry::{Coordinate, Direction};

/// Stable index of a block in a [`Field`](crate::field::Field).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub usize);

impl BlockId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rectangular occupant of the board.
///
/// The occupied rows and columns are derived from the coordinate on every
/// read, so they always follow the latest `set_row`/`set_column`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    coordinate: Coordinate,
    width: i32,
    height: i32,
}

impl Block {
    /// Creates a block; sizes are validated by the layout that places it.
    pub const fn new(row: i32, column: i32, width: i32, height: i32) -> Self {
        Self {
            coordinate: Coordinate::new(row, column),
            width,
            height,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.coordinate.row
    }

    #[inline]
    pub fn column(&self) -> i32 {
        self.coordinate.column
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells covered.
    pub fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Rows covered, one entry per unit of height.
    #[inline]
    pub fn occupied_rows(&self) -> Range<i32> {
        self.coordinate.row..self.coordinate.row + self.height
    }

    /// Columns covered, one entry per unit of width.
    #[inline]
    pub fn occupied_columns(&self) -> Range<i32> {
        self.coordinate.column..self.coordinate.column + self.width
    }

    /// Every covered cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.occupied_rows().flat_map(move |row| {
            self.occupied_columns()
                .map(move |column| Coordinate::new(row, column))
        })
    }

    pub fn contains(&self, cell: Coordinate) -> bool {
        self.occupied_rows().contains(&cell.row) && self.occupied_columns().contains(&cell.column)
    }

    pub fn set_row(&mut self, row: i32) {
        self.coordinate.row = row;
    }

    pub fn set_column(&mut self, column: i32) {
        self.coordinate.column = column;
    }

    pub fn set_coordinate(&mut self, coordinate: Coordinate) {
        self.set_column(coordinate.column);
        self.set_row(coordinate.row);
    }

    /// Moves the block to `coordinate` and hands back where it was.
    ///
    /// The returned coordinate is what a [`Move`](crate::moves::Move) records
    /// so the step can be reverted later.
    pub fn next_coordinate(&mut self, coordinate: Coordinate) -> Coordinate {
        let previous = self.coordinate;
        self.set_coordinate(coordinate);
        previous
    }

    /// A copy of this block shifted one unit in `direction`.
    pub fn moved(&self, direction: Direction) -> Self {
        Self {
            coordinate: self.coordinate.step(direction),
            ..*self
        }
    }

    /// True when every covered cell lies inside a `width` x `height` board.
    pub fn fits_within(&self, width: i32, height: i32) -> bool {
        self.coordinate.row >= 0
            && self.coordinate.column >= 0
            && self.coordinate.row + self.height <= height
            && self.coordinate.column + self.width <= width
    }

    /// Same position and same size.
    pub fn matches(&self, other: &Block) -> bool {
        self.coordinate.matches(&other.coordinate)
            && self.width == other.width
            && self.height == other.height
    }

    pub fn shares_rows_with(&self, other: &Block) -> bool {
        ranges_intersect(&self.occupied_rows(), &other.occupied_rows())
    }

    pub fn shares_columns_with(&self, other: &Block) -> bool {
        ranges_intersect(&self.occupied_columns(), &other.occupied_columns())
    }

    /// Coarse pre-filter: the blocks share at least one row or one column.
    pub fn shares_axis_with(&self, other: &Block) -> bool {
        self.shares_columns_with(other) || self.shares_rows_with(other)
    }

    /// Full rectangle intersection: the blocks cover a common cell.
    pub fn overlaps(&self, other: &Block) -> bool {
        self.shares_rows_with(other) && self.shares_columns_with(other)
    }

    pub fn is_above(&self, other: &Block) -> bool {
        self.coordinate.is_above(&other.coordinate)
    }

    pub fn is_below(&self, other: &Block) -> bool {
        self.coordinate.is_below(&other.coordinate)
    }

    pub fn is_to_left_of(&self, other: &Block) -> bool {
        self.coordinate.is_to_left_of(&other.coordinate)
    }

    pub fn is_to_right_of(&self, other: &Block) -> bool {
        self.coordinate.is_to_right_of(&other.coordinate)
    }
}

#[inline]
fn ranges_intersect(a: &Range<i32>, b: &Range<i32>) -> bool {
    a.start < b.end && b.start < a.end
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[R: {} C: {} H: {} W: {}]",
            self.coordinate.row, self.coordinate.column, self.height, self.width
        )
    }
}
