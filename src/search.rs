//! Breadth-first exploration of reachable board configurations.
//!
//! Every configuration is expanded by all legal single-unit steps. Visited
//! configurations are deduplicated by [`shape_key`], so boards that differ
//! only by swapping same-sized blocks are counted once.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::info;

use crate::block::BlockId;
use crate::field::Field;
use crate::geometry::{Coordinate, Direction};
use crate::grid::{shape_key, ShapeKey};

/// Summary of an exploration run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exploration {
    /// Distinct configurations visited, the start included.
    pub configurations: usize,
    /// Largest number of unit steps needed to reach a visited configuration.
    pub max_depth: usize,
    /// True if `limit` stopped the search before the space was exhausted.
    pub truncated: bool,
}

/// Explores every configuration reachable from `field`'s current positions.
///
/// `limit` caps the number of distinct configurations recorded. The field is
/// not modified; the search runs on a scratch copy.
pub fn reachable(field: &Field, limit: Option<usize>) -> Exploration {
    let limit = limit.unwrap_or(usize::MAX).max(1);
    let mut scratch = field.clone();
    let start = scratch.positions();
    scratch.restore_positions(&start);

    let mut seen_states: FxHashSet<ShapeKey> = FxHashSet::default();
    seen_states.insert(shape_key(&scratch));

    let mut queue: VecDeque<(Vec<Coordinate>, usize)> = VecDeque::new();
    queue.push_back((start, 0));

    let mut max_depth = 0;
    let mut truncated = false;
    let block_ids: Vec<BlockId> = scratch.blocks().map(|(id, _)| id).collect();

    'search: while let Some((positions, depth)) = queue.pop_front() {
        max_depth = max_depth.max(depth);
        scratch.restore_positions(&positions);

        for &id in &block_ids {
            for direction in Direction::ALL {
                if !scratch.do_move(id, direction, 1) {
                    continue;
                }

                let key = shape_key(&scratch);
                if !seen_states.contains(&key) {
                    if seen_states.len() >= limit {
                        truncated = true;
                        break 'search;
                    }
                    seen_states.insert(key);
                    queue.push_back((scratch.positions(), depth + 1));
                }

                scratch.undo_move();
            }
        }
    }

    let exploration = Exploration {
        configurations: seen_states.len(),
        max_depth,
        truncated,
    };
    info!(
        configurations = exploration.configurations,
        max_depth = exploration.max_depth,
        truncated = exploration.truncated,
        "exploration finished"
    );
    exploration
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block_visits_every_cell() {
        let field = Field::from_specs(2, 2, &[(0, 0, 1, 1)]).unwrap();
        let exploration = reachable(&field, None);
        assert_eq!(
            exploration,
            Exploration {
                configurations: 4,
                max_depth: 2,
                truncated: false,
            }
        );
    }

    #[test]
    fn test_equal_blocks_are_interchangeable() {
        // two small squares in a 1x3 strip: only the gap position matters
        let field = Field::from_specs(3, 1, &[(0, 0, 1, 1), (0, 1, 1, 1)]).unwrap();
        let exploration = reachable(&field, None);
        assert_eq!(exploration.configurations, 3);
        assert_eq!(exploration.max_depth, 2);
        assert!(!exploration.truncated);
    }

    #[test]
    fn test_full_board_has_one_configuration() {
        let field = Field::from_specs(2, 1, &[(0, 0, 1, 1), (0, 1, 1, 1)]).unwrap();
        let exploration = reachable(&field, None);
        assert_eq!(exploration.configurations, 1);
        assert_eq!(exploration.max_depth, 0);
    }

    #[test]
    fn test_limit_truncates() {
        let field = Field::new();
        let exploration = reachable(&field, Some(10));
        assert_eq!(exploration.configurations, 10);
        assert!(exploration.truncated);
    }

    #[test]
    fn test_search_leaves_field_untouched() {
        let mut field = Field::new();
        assert!(field.do_move(BlockId(0), Direction::Down, 1));
        let before = field.positions();

        let exploration = reachable(&field, Some(200));
        assert!(exploration.configurations > 1);
        assert_eq!(field.positions(), before);
        assert_eq!(field.move_count(), 1);
    }

    #[test]
    fn test_start_neighbours_are_distinct() {
        // six legal unit steps from the start, each to a new shape
        let exploration = reachable(&Field::new(), Some(7));
        assert_eq!(exploration.configurations, 7);
        assert_eq!(exploration.max_depth, 1);
    }
}
