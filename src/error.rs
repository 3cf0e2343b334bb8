//! Error types for layout construction, move validation and input parsing.

use crate::block::BlockId;
use crate::geometry::Coordinate;

/// Why a move request was rejected or could not be reversed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no block with id {0}")]
    UnknownBlock(BlockId),
    #[error("move distance must be at least 1")]
    ZeroDistance,
    /// Unit step `step` (1-based) would leave the board.
    #[error("step {step} moves block {block} off the board")]
    OutOfBounds { block: BlockId, step: u32 },
    /// Unit step `step` (1-based) would overlap block `with`.
    #[error("step {step} moves block {block} into block {with}")]
    Collision {
        block: BlockId,
        step: u32,
        with: BlockId,
    },
    /// A recorded move no longer describes the block's position.
    #[error("history is corrupt: block {block} expected at {expected}, found at {found}")]
    CorruptHistory {
        block: BlockId,
        expected: Coordinate,
        found: Coordinate,
    },
}

/// Why a block layout cannot be placed on a board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: i32, height: i32 },
    #[error("block {index} has zero size ({width}x{height})")]
    ZeroSize { index: usize, width: i32, height: i32 },
    #[error("block {index} at {at} does not fit on the board")]
    OutOfBounds { index: usize, at: Coordinate },
    #[error("blocks {first} and {second} overlap")]
    Overlap { first: usize, second: usize },
}

/// Errors from parsing textual move and direction input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown direction '{0}' (expected up, down, left or right)")]
    Direction(String),
    #[error("invalid move '{0}' (expected id:direction[:distance])")]
    Move(String),
    #[error("invalid number '{0}'")]
    Number(String),
}
