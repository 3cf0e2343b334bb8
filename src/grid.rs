//! Dense cell grids derived from a field.
//!
//! The field itself only stores block rectangles. When a per-cell view is
//! needed (rendering, configuration keys) it is rebuilt from scratch, so it can
//! never drift out of sync with the blocks.

use crate::block::BlockId;
use crate::field::Field;
use crate::geometry::Coordinate;

/// Owner of every cell on the board, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: i32,
    height: i32,
    cells: Vec<Option<BlockId>>,
}

impl OccupancyGrid {
    /// Builds the grid for the field's current positions.
    pub fn from_field(field: &Field) -> Self {
        let (width, height) = (field.width(), field.height());
        let mut cells = vec![None; (width * height) as usize];

        for (id, block) in field.blocks() {
            for cell in block.cells() {
                cells[cell_to_idx(width, cell)] = Some(id);
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    /// The block covering `cell`; `None` for empty or off-board cells.
    pub fn owner(&self, cell: Coordinate) -> Option<BlockId> {
        if !(0..self.height).contains(&cell.row) || !(0..self.width).contains(&cell.column) {
            return None;
        }
        self.cells[cell_to_idx(self.width, cell)]
    }

    /// Cells no block covers, row by row.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, owner)| owner.is_none())
            .map(|(idx, _)| idx_to_cell(self.width, idx))
    }

    /// Cells, row-major.
    pub fn cells(&self) -> &[Option<BlockId>] {
        &self.cells
    }
}

/// Converts a cell to its row-major index.
#[inline(always)]
pub fn cell_to_idx(width: i32, cell: Coordinate) -> usize {
    (cell.row * width + cell.column) as usize
}

/// Converts a row-major index back to a cell.
#[inline(always)]
pub fn idx_to_cell(width: i32, idx: usize) -> Coordinate {
    let idx = idx as i32;
    Coordinate::new(idx / width, idx % width)
}

/// Board configuration with block identities erased.
///
/// Each cell holds the size class `width << 16 | height` of the block that
/// covers it, or 0 when empty. Two configurations that differ only by
/// swapping same-sized blocks get the same key. The key still pins down the
/// block rectangles: in a region covered by identical rectangles the top-left
/// cell must be a rectangle's corner, so the tiling is unique.
pub type ShapeKey = Vec<u32>;

pub fn shape_key(field: &Field) -> ShapeKey {
    let width = field.width();
    let mut key = vec![0u32; (width * field.height()) as usize];

    for (_, block) in field.blocks() {
        let class = ((block.width() as u32) << 16) | block.height() as u32;
        for cell in block.cells() {
            key[cell_to_idx(width, cell)] = class;
        }
    }

    key
}

/// Renders the board as text, one line per row.
///
/// Cells show their block's id (`0-9`, then `A-Z`, `*` beyond that); empty
/// cells show as '.'.
pub fn format_board(field: &Field) -> String {
    let grid = OccupancyGrid::from_field(field);
    let mut output = String::with_capacity(((grid.width + 1) * grid.height) as usize);

    for row in grid.cells.chunks(grid.width as usize) {
        for owner in row {
            let display_char = match owner {
                None => '.',
                Some(id) if id.index() < 10 => char::from(b'0' + id.index() as u8),
                Some(id) if id.index() < 36 => char::from(b'A' + (id.index() - 10) as u8),
                Some(_) => '*',
            };
            output.push(display_char);
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Direction;

    #[test]
    fn test_format_standard_board() {
        let field = Field::new();
        insta::assert_snapshot!(format_board(&field), @r"
        0221
        0221
        .33.
        4685
        4795
        ");
    }

    #[test]
    fn test_format_after_move() {
        let mut field = Field::new();
        assert!(field.do_move(BlockId(3), Direction::Left, 1));
        assert!(field.do_move(BlockId(1), Direction::Down, 1));
        insta::assert_snapshot!(field.to_string(), @r"
        022.
        0221
        33.1
        4685
        4795
        ");
    }

    #[test]
    fn test_owner_and_empty_cells() {
        let field = Field::new();
        let grid = OccupancyGrid::from_field(&field);

        assert_eq!(grid.owner(Coordinate::new(0, 1)), Some(BlockId(2)));
        assert_eq!(grid.owner(Coordinate::new(2, 0)), None);
        assert_eq!(grid.owner(Coordinate::new(-1, 0)), None);
        assert_eq!(grid.owner(Coordinate::new(0, 4)), None);

        let empty: Vec<_> = grid.empty_cells().collect();
        assert_eq!(empty, vec![Coordinate::new(2, 0), Coordinate::new(2, 3)]);
    }

    #[test]
    fn test_grid_agrees_with_block_lookup() {
        let field = Field::new();
        let grid = OccupancyGrid::from_field(&field);
        for (idx, owner) in grid.cells().iter().enumerate() {
            assert_eq!(*owner, field.block_at(idx_to_cell(field.width(), idx)));
        }
    }

    #[test]
    fn test_index_roundtrip() {
        for idx in 0..20 {
            assert_eq!(cell_to_idx(4, idx_to_cell(4, idx)), idx);
        }
    }

    #[test]
    fn test_shape_key_ignores_identity_of_equal_blocks() {
        let a = Field::from_specs(3, 1, &[(0, 0, 1, 1), (0, 2, 1, 1)]).unwrap();
        let b = Field::from_specs(3, 1, &[(0, 2, 1, 1), (0, 0, 1, 1)]).unwrap();
        assert_eq!(shape_key(&a), shape_key(&b));

        let c = Field::from_specs(3, 1, &[(0, 0, 1, 1), (0, 1, 1, 1)]).unwrap();
        assert_ne!(shape_key(&a), shape_key(&c));
    }

    #[test]
    fn test_shape_key_separates_block_sizes() {
        let bar = Field::from_specs(2, 1, &[(0, 0, 2, 1)]).unwrap();
        let pair = Field::from_specs(2, 1, &[(0, 0, 1, 1), (0, 1, 1, 1)]).unwrap();
        assert_ne!(shape_key(&bar), shape_key(&pair));
    }
}
