//! Daily maze generation
//!
//! Algorithm: single carve per anchor
//! 1. Seed Mulberry32 with the sum of the seed string's UTF-16 code units
//! 2. Visit every anchor (odd column, odd row, inside the border) row by row
//!    - Mark the anchor as a path
//!    - Shuffle the directions with the random comparator sort
//!    - Open the wall towards the first neighbour two cells away that is
//!      inside the border and not yet visited, then stop
//!
//! A carve opens only the connecting cell; the neighbour anchor becomes a
//! path when its own turn comes. Anchors above and to the left have already
//! had their turn, while those to the right and below have not, so every
//! anchor except the bottom-right one links to its right or lower
//! neighbour. Following those links always ends at the bottom-right anchor,
//! which makes the passages a spanning tree over all anchors.

use crate::rng::Mulberry32;
use crate::shuffle::comparator_shuffle;
use crate::{Position, MAZE_HEIGHT, MAZE_WIDTH};

#[cfg(feature = "std")]
extern crate alloc;
#[cfg(feature = "std")]
use alloc::vec::Vec;

/// Wall cell
pub const WALL: u8 = 0;
/// Walkable cell
pub const PATH: u8 = 1;

/// Row-major binary grid, `grid[y][x]`
pub type Grid = [[u8; MAZE_WIDTH]; MAZE_HEIGHT];

// Carve order before shuffling: up, right, down, left as (dx, dy)
const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Derive the numeric RNG seed from a day seed string
///
/// Sums UTF-16 code units, so `"2025-8-4"` gives 399.
pub fn seed_number(seed: &str) -> u32 {
    seed.encode_utf16()
        .fold(0u32, |acc, unit| acc.wrapping_add(unit as u32))
}

/// A generated maze grid
#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Generate the maze for a day seed such as `"2025-8-4"`
    pub fn generate(seed: &str) -> Self {
        Self::from_seed_number(seed_number(seed))
    }

    /// Generate a maze straight from a numeric RNG seed
    pub fn from_seed_number(seed: u32) -> Self {
        let mut maze = Self {
            grid: [[WALL; MAZE_WIDTH]; MAZE_HEIGHT],
        };

        let mut rng = Mulberry32::new(seed);
        maze.carve(&mut rng);
        maze
    }

    fn carve(&mut self, rng: &mut Mulberry32) {
        for y in (1..MAZE_HEIGHT - 1).step_by(2) {
            for x in (1..MAZE_WIDTH - 1).step_by(2) {
                self.grid[y][x] = PATH;

                let mut dirs = DIRECTIONS;
                comparator_shuffle(&mut dirs, rng);

                for (dx, dy) in dirs {
                    let nx = x as isize + dx * 2;
                    let ny = y as isize + dy * 2;

                    if Self::is_interior(nx, ny) && self.grid[ny as usize][nx as usize] == WALL {
                        // Only the connecting cell; the neighbour opens on its own turn
                        let wx = (x as isize + dx) as usize;
                        let wy = (y as isize + dy) as usize;
                        self.grid[wy][wx] = PATH;
                        break;
                    }
                }
            }
        }
    }

    /// Strictly inside the outer border
    fn is_interior(x: isize, y: isize) -> bool {
        x >= 1 && y >= 1 && x < MAZE_WIDTH as isize - 1 && y < MAZE_HEIGHT as isize - 1
    }

    /// Cell value at `(x, y)`, or `None` outside the grid
    pub fn cell(&self, x: usize, y: usize) -> Option<u8> {
        self.grid.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Whether `(x, y)` is inside the grid and walkable
    pub fn is_passable(&self, pos: Position) -> bool {
        self.cell(pos.x, pos.y) == Some(PATH)
    }

    /// The raw grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Iterate the grid row by row
    pub fn rows(&self) -> impl Iterator<Item = &[u8; MAZE_WIDTH]> {
        self.grid.iter()
    }

    /// Convert the grid to nested vectors for serialisation on the host
    #[cfg(feature = "std")]
    pub fn to_grid_vec(&self) -> Vec<Vec<u8>> {
        self.grid.iter().map(|row| row.to_vec()).collect()
    }
}

impl core::fmt::Debug for Maze {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for row in &self.grid {
            for &cell in row {
                f.write_str(if cell == PATH { "." } else { "#" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GOAL, START};

    /// The grid published for 2025-8-4
    const GOLDEN_2025_8_4: [&str; MAZE_HEIGHT] = [
        "000000000000000000000000000000000000000",
        "010101111101110101010111010111110101110",
        "010100000100010101010001010000010100010",
        "010101111101011101010111111111010101110",
        "010100000101000101010000000001010100010",
        "011111110101111111011101011101010111110",
        "000000010100000001000101000101010000010",
        "011111011111111111010111111111010111110",
        "000001000000000001010000000001010000010",
        "010101011101011111110111110101011111010",
        "010101000101000000010000010101000001010",
        "011111010101011111111111111101111111010",
        "000001010101000000000000000100000001010",
        "010111110111110111110111110111011111110",
        "010000010000010000010000010001000000010",
        "011111111111111111111111111111111111110",
        "000000000000000000000000000000000000000",
        "000000000000000000000000000000000000000",
    ];

    #[test]
    fn test_seed_number() {
        assert_eq!(seed_number("2025-8-4"), 399);
        assert_eq!(seed_number("2025-12-31"), 490);
        assert_eq!(seed_number(""), 0);
    }

    #[test]
    fn test_golden_grid() {
        let maze = Maze::generate("2025-8-4");
        for (y, row) in GOLDEN_2025_8_4.iter().enumerate() {
            for (x, ch) in row.bytes().enumerate() {
                assert_eq!(maze.grid()[y][x], ch - b'0', "mismatch at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_determinism() {
        assert!(Maze::generate("2025-9-1") == Maze::generate("2025-9-1"));
        assert!(Maze::from_seed_number(99999) == Maze::from_seed_number(99999));
    }

    #[test]
    fn test_different_seeds() {
        // Different seeds should (almost certainly) produce different mazes
        assert!(Maze::from_seed_number(11111) != Maze::from_seed_number(22222));
    }

    #[test]
    fn test_border_is_wall() {
        for seed in 0..64 {
            let maze = Maze::from_seed_number(seed * 37);
            for x in 0..MAZE_WIDTH {
                assert_eq!(maze.cell(x, 0), Some(WALL));
                assert_eq!(maze.cell(x, MAZE_HEIGHT - 1), Some(WALL));
            }
            for y in 0..MAZE_HEIGHT {
                assert_eq!(maze.cell(0, y), Some(WALL));
                assert_eq!(maze.cell(MAZE_WIDTH - 1, y), Some(WALL));
            }
        }
    }

    #[test]
    fn test_anchors_are_paths() {
        let maze = Maze::generate("2025-10-16");
        for y in (1..MAZE_HEIGHT - 1).step_by(2) {
            for x in (1..MAZE_WIDTH - 1).step_by(2) {
                assert!(maze.is_passable(Position::new(x, y)));
            }
        }
        // Even/even cells are never carved
        assert_eq!(maze.cell(2, 2), Some(WALL));
    }

    #[test]
    fn test_goal_open_start_closed() {
        // The start sits in the even row below the last anchor row, which
        // nothing can carve into; the goal is an anchor
        let maze = Maze::generate("2025-8-4");
        assert!(maze.is_passable(GOAL));
        assert!(!maze.is_passable(START));
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let maze = Maze::from_seed_number(1);
        assert_eq!(maze.cell(MAZE_WIDTH, 0), None);
        assert_eq!(maze.cell(0, MAZE_HEIGHT), None);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_to_grid_vec() {
        let maze = Maze::from_seed_number(12345);
        let grid_vec = maze.to_grid_vec();

        assert_eq!(grid_vec.len(), MAZE_HEIGHT);
        for (y, row) in grid_vec.iter().enumerate() {
            assert_eq!(row.len(), MAZE_WIDTH);
            assert_eq!(row.as_slice(), &maze.grid()[y][..]);
        }
    }
}
