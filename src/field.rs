//! The board: block arena, legality checks and move history.
//!
//! Moves are applied one unit step at a time. Every step is checked against
//! the board edges and against every other block; if any step of a request
//! fails, the steps already taken are undone so the request has no effect.

use std::fmt;

use tracing::{debug, error, trace};

use crate::block::{Block, BlockId};
use crate::error::{LayoutError, MoveError};
use crate::geometry::{Coordinate, Direction};
use crate::grid::format_board;
use crate::layout::{BlockSpec, Layout};
use crate::moves::{Move, MoveRequest};

/// Owner of all blocks on a board and of the history of committed moves.
#[derive(Clone, Debug)]
pub struct Field {
    initial: Layout,
    blocks: Vec<Block>,
    history: Vec<Move>,
}

impl Field {
    /// A field holding the standard start position.
    pub fn new() -> Self {
        Self::with_layout(Layout::standard())
    }

    /// A field whose start (and reset) position is `layout`.
    pub fn with_layout(layout: Layout) -> Self {
        Self {
            blocks: layout.blocks().to_vec(),
            initial: layout,
            history: Vec::new(),
        }
    }

    /// Validates `specs` and builds a field from them.
    pub fn from_specs(width: i32, height: i32, specs: &[BlockSpec]) -> Result<Self, LayoutError> {
        Layout::new(width, height, specs).map(Self::with_layout)
    }

    /// Puts every block back at its start position and forgets all moves.
    pub fn reset_positions(&mut self) {
        self.blocks.clear();
        self.blocks.extend_from_slice(self.initial.blocks());
        self.history.clear();
        debug!(blocks = self.blocks.len(), "positions reset");
    }

    /// Number of committed moves that can still be undone.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn width(&self) -> i32 {
        self.initial.width()
    }

    pub fn height(&self) -> i32 {
        self.initial.height()
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.index())
    }

    /// All blocks with their ids, in id order.
    pub fn blocks(&self) -> impl ExactSizeIterator<Item = (BlockId, &Block)> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .map(|(index, block)| (BlockId(index), block))
    }

    /// Committed moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Coordinates of every block, in id order.
    pub fn positions(&self) -> Vec<Coordinate> {
        self.blocks.iter().map(Block::coordinate).collect()
    }

    /// The block covering `cell`, if any.
    pub fn block_at(&self, cell: Coordinate) -> Option<BlockId> {
        self.blocks()
            .find(|(_, block)| block.contains(cell))
            .map(|(id, _)| id)
    }

    /// Moves `id` by `distance` unit steps in `direction`.
    ///
    /// Returns `false` and leaves the board unchanged when any step is illegal.
    pub fn do_move(&mut self, id: BlockId, direction: Direction, distance: u32) -> bool {
        self.try_move(id, direction, distance).is_ok()
    }

    /// Like [`do_move`](Self::do_move), reporting why a move was rejected.
    pub fn try_move(
        &mut self,
        id: BlockId,
        direction: Direction,
        distance: u32,
    ) -> Result<Move, MoveError> {
        let Some(block) = self.blocks.get(id.index()) else {
            return Err(MoveError::UnknownBlock(id));
        };
        if distance == 0 {
            return Err(MoveError::ZeroDistance);
        }

        let from = block.coordinate();
        let mut provisional: Vec<Move> = Vec::new();

        for step in 1..=distance {
            if let Err(err) = self.check_step(id, direction, step) {
                // roll back in reverse order
                while let Some(taken) = provisional.pop() {
                    self.revert(&taken);
                }
                debug!(block = %id, %direction, distance, %err, "move rejected");
                return Err(err);
            }

            let block = &mut self.blocks[id.index()];
            let target = block.coordinate().step(direction);
            let previous = block.next_coordinate(target);
            provisional.push(Move::new(id, direction, 1, previous));
            trace!(block = %id, step, to = %target, "step taken");
        }

        let committed = Move::new(id, direction, distance, from);
        self.history.push(committed);
        debug_assert!(self.is_consistent(), "board invariant broken by {committed}");
        debug!(%committed, moves = self.history.len(), "move committed");
        Ok(committed)
    }

    /// Applies a parsed request.
    pub fn apply(&mut self, request: MoveRequest) -> Result<Move, MoveError> {
        self.try_move(request.block, request.direction, request.distance)
    }

    /// Reverts the most recent move, returning it. Does nothing on an empty
    /// history.
    ///
    /// # Panics
    ///
    /// If the recorded move no longer matches the board.
    pub fn undo_move(&mut self) -> Option<Move> {
        let last = self.history.pop()?;
        self.revert(&last);
        debug!(undone = %last, moves = self.history.len(), "move undone");
        Some(last)
    }

    /// True if `id` can take one unit step in `direction`.
    pub fn can_step(&self, id: BlockId, direction: Direction) -> bool {
        id.index() < self.blocks.len() && self.check_step(id, direction, 1).is_ok()
    }

    /// How far `id` can slide in `direction` before hitting an edge or a block.
    pub fn max_distance(&self, id: BlockId, direction: Direction) -> u32 {
        let Some(block) = self.block(id) else {
            return 0;
        };

        let mut candidate = *block;
        let mut distance = 0;
        loop {
            candidate = candidate.moved(direction);
            if !candidate.fits_within(self.width(), self.height())
                || self.collision(id, &candidate).is_some()
            {
                return distance;
            }
            distance += 1;
        }
    }

    /// Every move `do_move` would accept right now, ordered by block, then
    /// direction, then distance.
    pub fn legal_moves(&self) -> Vec<MoveRequest> {
        let mut moves = Vec::new();
        for (block, _) in self.blocks() {
            for direction in Direction::ALL {
                for distance in 1..=self.max_distance(block, direction) {
                    moves.push(MoveRequest {
                        block,
                        direction,
                        distance,
                    });
                }
            }
        }
        moves
    }

    /// True when every block is on the board and no two blocks overlap.
    pub fn is_consistent(&self) -> bool {
        let (width, height) = (self.width(), self.height());
        self.blocks.iter().enumerate().all(|(index, block)| {
            block.fits_within(width, height)
                && self.blocks[index + 1..]
                    .iter()
                    .all(|other| !block.overlaps(other))
        })
    }

    /// Moves every block to `positions` (id order) and clears the history.
    pub(crate) fn restore_positions(&mut self, positions: &[Coordinate]) {
        for (block, &coordinate) in self.blocks.iter_mut().zip(positions) {
            block.set_coordinate(coordinate);
        }
        self.history.clear();
        debug_assert!(self.is_consistent());
    }

    /// Checks unit step number `step` for `id`, from its current position.
    fn check_step(&self, id: BlockId, direction: Direction, step: u32) -> Result<(), MoveError> {
        let candidate = self.blocks[id.index()].moved(direction);

        if !candidate.fits_within(self.width(), self.height()) {
            return Err(MoveError::OutOfBounds { block: id, step });
        }
        if let Some(with) = self.collision(id, &candidate) {
            return Err(MoveError::Collision {
                block: id,
                step,
                with,
            });
        }
        Ok(())
    }

    /// First block other than `id` that overlaps `candidate`.
    fn collision(&self, id: BlockId, candidate: &Block) -> Option<BlockId> {
        self.blocks()
            .filter(|&(other, _)| other != id)
            .find(|(_, block)| block.overlaps(candidate))
            .map(|(other, _)| other)
    }

    fn revert(&mut self, taken: &Move) {
        if let Err(err) = taken.undo(&mut self.blocks) {
            error!(%err, "move history does not match the board");
            panic!("cannot undo {taken}: {err}");
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_board(self))
    }
}
