//! Setting Sun sliding-block puzzle engine.
//!
//! A fixed-size board holds rectangular blocks that slide horizontally or
//! vertically into empty space, one unit at a time, without overlapping each
//! other or leaving the board. The [`Field`] validates and applies moves
//! atomically and keeps an undo history; presentation code talks to it through
//! block ids and read-only block views.

pub mod block;
pub mod error;
pub mod field;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod moves;
pub mod search;

pub use block::{Block, BlockId};
pub use error::{LayoutError, MoveError, ParseError};
pub use field::Field;
pub use geometry::{Coordinate, Direction};
pub use layout::Layout;
pub use moves::{Move, MoveRequest};
