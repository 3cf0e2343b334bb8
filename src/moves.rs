//! Reversible move records and textual move requests.

use std::fmt;
use std::str::FromStr;

use crate::block::{Block, BlockId};
use crate::error::{MoveError, ParseError};
use crate::geometry::{Coordinate, Direction};

/// A committed displacement of one block.
///
/// Moves are receipts: constructing one does not move anything. The
/// coordinate the block had before the move is stored alongside, so undoing
/// never depends on any other bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    block: BlockId,
    direction: Direction,
    distance: u32,
    from: Coordinate,
}

impl Move {
    pub fn new(block: BlockId, direction: Direction, distance: u32, from: Coordinate) -> Self {
        Self {
            block,
            direction,
            distance,
            from,
        }
    }

    pub fn block(&self) -> BlockId {
        self.block
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Where the block was before this move.
    pub fn from(&self) -> Coordinate {
        self.from
    }

    /// Where the block ended up after this move.
    pub fn destination(&self) -> Coordinate {
        self.from.offset(self.direction, self.distance as i32)
    }

    /// Puts the block back where it was before this move.
    ///
    /// Fails without touching anything if the block is not at the move's
    /// destination; that only happens when the history no longer matches the
    /// board.
    pub fn undo(&self, blocks: &mut [Block]) -> Result<(), MoveError> {
        let block = blocks
            .get_mut(self.block.index())
            .ok_or(MoveError::UnknownBlock(self.block))?;

        let expected = self.destination();
        if block.coordinate() != expected {
            return Err(MoveError::CorruptHistory {
                block: self.block,
                expected,
                found: block.coordinate(),
            });
        }

        block.set_coordinate(self.from);
        Ok(())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} x{}", self.block, self.direction, self.distance)
    }
}

/// A move the caller wants to make: `id:direction[:distance]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub block: BlockId,
    pub direction: Direction,
    pub distance: u32,
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.block.index(), self.direction, self.distance)
    }
}

impl FromStr for MoveRequest {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(':');
        let (Some(block), Some(direction)) = (parts.next(), parts.next()) else {
            return Err(ParseError::Move(s.to_string()));
        };
        let distance = parts.next();
        if parts.next().is_some() {
            return Err(ParseError::Move(s.to_string()));
        }

        let block = block
            .parse::<usize>()
            .map_err(|_| ParseError::Number(block.to_string()))?;
        let direction = direction.parse::<Direction>()?;
        let distance = match distance {
            Some(text) => text
                .parse::<u32>()
                .map_err(|_| ParseError::Number(text.to_string()))?,
            None => 1,
        };

        Ok(Self {
            block: BlockId(block),
            direction,
            distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_applies_distance() {
        let mv = Move::new(BlockId(0), Direction::Right, 3, Coordinate::new(1, 0));
        assert_eq!(mv.destination(), Coordinate::new(1, 3));
    }

    #[test]
    fn test_undo_restores_origin() {
        let mut blocks = vec![Block::new(2, 0, 1, 1), Block::new(0, 3, 1, 2)];
        // block 1 went down two rows from (0, 3)
        blocks[1].set_row(2);
        let mv = Move::new(BlockId(1), Direction::Down, 2, Coordinate::new(0, 3));

        mv.undo(&mut blocks).unwrap();
        assert_eq!(blocks[1].coordinate(), Coordinate::new(0, 3));
        assert_eq!(blocks[0].coordinate(), Coordinate::new(2, 0));
    }

    #[test]
    fn test_undo_detects_mismatched_history() {
        let mut blocks = vec![Block::new(0, 0, 1, 1)];
        let mv = Move::new(BlockId(0), Direction::Down, 1, Coordinate::new(0, 0));

        let err = mv.undo(&mut blocks).unwrap_err();
        assert_eq!(
            err,
            MoveError::CorruptHistory {
                block: BlockId(0),
                expected: Coordinate::new(1, 0),
                found: Coordinate::new(0, 0),
            }
        );
        assert_eq!(blocks[0].coordinate(), Coordinate::new(0, 0));

        let missing = Move::new(BlockId(5), Direction::Up, 1, Coordinate::new(1, 0));
        assert_eq!(
            missing.undo(&mut blocks),
            Err(MoveError::UnknownBlock(BlockId(5)))
        );
    }

    #[test]
    fn test_parse_request() {
        let request: MoveRequest = "3:left:2".parse().unwrap();
        assert_eq!(
            request,
            MoveRequest {
                block: BlockId(3),
                direction: Direction::Left,
                distance: 2,
            }
        );

        let request: MoveRequest = "0:d".parse().unwrap();
        assert_eq!(request.distance, 1);
        assert_eq!(request.direction, Direction::Down);
        assert_eq!(request.to_string(), "0:down:1");
    }

    #[test]
    fn test_parse_request_errors() {
        assert!(matches!("3".parse::<MoveRequest>(), Err(ParseError::Move(_))));
        assert!(matches!(
            "3:up:1:1".parse::<MoveRequest>(),
            Err(ParseError::Move(_))
        ));
        assert!(matches!(
            "x:up".parse::<MoveRequest>(),
            Err(ParseError::Number(_))
        ));
        assert!(matches!(
            "1:up:-2".parse::<MoveRequest>(),
            Err(ParseError::Number(_))
        ));
        assert!(matches!(
            "1:north".parse::<MoveRequest>(),
            Err(ParseError::Direction(_))
        ));
    }

    #[test]
    fn test_display() {
        let mv = Move::new(BlockId(2), Direction::Up, 1, Coordinate::new(1, 1));
        assert_eq!(mv.to_string(), "#2 up x1");
    }
}
