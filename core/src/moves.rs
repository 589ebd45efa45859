//! Player moves and replay
//!
//! A replay always starts from [`START`] and applies the moves in order.
//! A move that would leave the grid or enter a wall is dropped and the
//! player stays put; replay never fails.

use crate::maze_gen::Maze;
use crate::{Position, GOAL, START};

/// One keystroke of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// `w`
    Up,
    /// `a`
    Left,
    /// `s`
    Down,
    /// `d`
    Right,
    /// Any other letter: counted as a move, but goes nowhere
    Idle,
}

impl Move {
    /// Decode one token letter; unknown letters become [`Move::Idle`]
    pub fn from_char(c: char) -> Self {
        match c {
            'w' => Move::Up,
            'a' => Move::Left,
            's' => Move::Down,
            'd' => Move::Right,
            _ => Move::Idle,
        }
    }

    /// Token letter for this move; idle moves have no canonical letter
    pub fn to_char(self) -> Option<char> {
        match self {
            Move::Up => Some('w'),
            Move::Left => Some('a'),
            Move::Down => Some('s'),
            Move::Right => Some('d'),
            Move::Idle => None,
        }
    }

    /// Unit step as (dx, dy), y growing downwards
    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (0, -1),
            Move::Left => (-1, 0),
            Move::Down => (0, 1),
            Move::Right => (1, 0),
            Move::Idle => (0, 0),
        }
    }

    /// Destination of this move from `from`, or `None` if it leaves the grid on the top/left
    fn step(self, from: Position) -> Option<Position> {
        let (dx, dy) = self.delta();
        let x = from.x.checked_add_signed(dx)?;
        let y = from.y.checked_add_signed(dy)?;
        Some(Position::new(x, y))
    }
}

/// Result of replaying a move sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Replay {
    /// Where the player ended up
    pub position: Position,

    /// Whether `position` is the goal cell
    pub reached_goal: bool,
}

/// Replay `moves` against `maze` from the start cell
pub fn replay(moves: &[Move], maze: &Maze) -> Replay {
    let mut position = START;

    for &mv in moves {
        // Bounds on the bottom/right are covered by is_passable
        if let Some(next) = mv.step(position) {
            if maze.is_passable(next) {
                position = next;
            }
        }
    }

    Replay {
        position,
        reached_goal: position == GOAL,
    }
}
