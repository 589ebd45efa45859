//! Shared types, constants, and logic for the daily maze
//!
//! This crate holds the deterministic engine: the seeded RNG, the maze
//! generator, move replay, and the puzzle-number calendar. Everything in
//! here is a pure function of its inputs, so a maze and a replay can be
//! rebuilt from a URL on every request without any stored session.
//!
//! The crate is no_std compatible, with an optional `std` feature for
//! host-side conveniences.

#![no_std]

pub mod day;
pub mod maze_gen;
pub mod moves;
pub mod rng;
pub mod shuffle;

// Re-export commonly used types for convenience
pub use day::{day_index, EPOCH_MILLIS, MILLIS_PER_DAY, UTC_OFFSET_SECONDS};
pub use maze_gen::{seed_number, Grid, Maze};
pub use moves::{replay, Move, Replay};
pub use rng::Mulberry32;
pub use shuffle::comparator_shuffle;

/// Output canvas size in pixels
pub const CANVAS_WIDTH: u32 = 1280;
pub const CANVAS_HEIGHT: u32 = 720;

/// Pixel size of one maze cell
pub const CELL_WIDTH: u32 = 32;
pub const CELL_HEIGHT: u32 = 32;

/// Bounding box of the maze area on the canvas
pub const MAZE_TOP_LEFT: Point = Point { x: 13, y: 118 };
pub const MAZE_BOTTOM_RIGHT: Point = Point { x: 1271, y: 708 };

/// Grid columns that fit in the bounding box (39)
pub const MAZE_WIDTH: usize = ((MAZE_BOTTOM_RIGHT.x - MAZE_TOP_LEFT.x) / CELL_WIDTH) as usize;

/// Grid rows that fit in the bounding box (18)
pub const MAZE_HEIGHT: usize = ((MAZE_BOTTOM_RIGHT.y - MAZE_TOP_LEFT.y) / CELL_HEIGHT) as usize;

/// Where every replay begins: horizontal center, one row above the bottom edge
pub const START: Position = Position {
    x: MAZE_WIDTH / 2,
    y: MAZE_HEIGHT - 2,
};

/// Reaching this cell solves the puzzle: horizontal center, one row below the top edge
pub const GOAL: Position = Position {
    x: MAZE_WIDTH / 2,
    y: 1,
};

/// A pixel coordinate on the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// A cell coordinate on the maze grid (column, row)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Top-left pixel of this cell on the canvas
    pub const fn to_pixel(self) -> Point {
        Point {
            x: MAZE_TOP_LEFT.x + self.x as u32 * CELL_WIDTH,
            y: MAZE_TOP_LEFT.y + self.y as u32 * CELL_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MAZE_WIDTH, 39);
        assert_eq!(MAZE_HEIGHT, 18);
        assert_eq!(START, Position::new(19, 16));
        assert_eq!(GOAL, Position::new(19, 1));
    }

    #[test]
    fn test_to_pixel() {
        assert_eq!(Position::new(0, 0).to_pixel(), MAZE_TOP_LEFT);
        assert_eq!(GOAL.to_pixel(), Point { x: 13 + 19 * 32, y: 118 + 32 });
    }
}
