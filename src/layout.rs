//! Board layouts: block placements and board dimensions.
//!
//! A layout is the declarative start state of a board. The standard "Setting
//! Sun" layout is provided as a constant; custom layouts (for instance an
//! under-filled practice board) are validated before a field is built from
//! them.

use crate::block::Block;
use crate::error::LayoutError;

/// Width of the standard board, in cells.
pub const BOARD_WIDTH: i32 = 4;
/// Height of the standard board, in cells.
pub const BOARD_HEIGHT: i32 = 5;

/// Placement of one block: `(row, column, width, height)`.
pub type BlockSpec = (i32, i32, i32, i32);

/// The canonical start position.
///
/// Two 1x2 blocks down each side, the 2x2 block top centre, a 2x1 bar below
/// it and four 1x1 blocks bottom centre. Cells `(2, 0)` and `(2, 3)` are empty.
pub const STANDARD_BLOCKS: [BlockSpec; 10] = [
    // left and right columns, top
    (0, 0, 1, 2),
    (0, 3, 1, 2),
    // large square
    (0, 1, 2, 2),
    // horizontal bar
    (2, 1, 2, 1),
    // left and right columns, bottom
    (3, 0, 1, 2),
    (3, 3, 1, 2),
    // small squares
    (3, 1, 1, 1),
    (4, 1, 1, 1),
    (3, 2, 1, 1),
    (4, 2, 1, 1),
];

/// Board dimensions plus the blocks placed on it, in id order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    width: i32,
    height: i32,
    blocks: Vec<Block>,
}

impl Layout {
    /// Validates and builds a layout.
    ///
    /// Every block must have a positive size, lie inside the board, and not
    /// overlap any other block.
    pub fn new(width: i32, height: i32, specs: &[BlockSpec]) -> Result<Self, LayoutError> {
        if width < 1 || height < 1 {
            return Err(LayoutError::EmptyBoard { width, height });
        }

        let mut blocks: Vec<Block> = Vec::with_capacity(specs.len());
        for (index, &(row, column, block_width, block_height)) in specs.iter().enumerate() {
            if block_width < 1 || block_height < 1 {
                return Err(LayoutError::ZeroSize {
                    index,
                    width: block_width,
                    height: block_height,
                });
            }

            let block = Block::new(row, column, block_width, block_height);
            if !block.fits_within(width, height) {
                return Err(LayoutError::OutOfBounds {
                    index,
                    at: block.coordinate(),
                });
            }

            if let Some(first) = blocks.iter().position(|placed| placed.overlaps(&block)) {
                return Err(LayoutError::Overlap {
                    first,
                    second: index,
                });
            }

            blocks.push(block);
        }

        Ok(Self {
            width,
            height,
            blocks,
        })
    }

    /// The 4x5 "Setting Sun" start position.
    pub fn standard() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            blocks: STANDARD_BLOCKS
                .iter()
                .map(|&(row, column, width, height)| Block::new(row, column, width, height))
                .collect(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}
