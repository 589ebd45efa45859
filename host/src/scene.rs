//! Scene facts handed to the image renderer
//!
//! A [`Scene`] is everything the renderer needs for one request and
//! nothing more. It serialises to JSON with a `"scene"` tag.

use chrono::{DateTime, Utc};
use maze_core::{
    replay, Maze, Point, Position, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_HEIGHT, CELL_WIDTH, GOAL,
    MAZE_BOTTOM_RIGHT, MAZE_HEIGHT, MAZE_TOP_LEFT, MAZE_WIDTH,
};
use serde::Serialize;

use crate::calendar::{local_time, maze_number, today_seed};
use crate::route::Route;

/// Win screen label widths in pixels
const WIN_NUMBER_MAX_WIDTH: u32 = 659 - 560;
const WIN_MOVES_MAX_WIDTH: u32 = 866 - 743;
const WIN_FONT_SIZE: u32 = 32;

/// Background asset for each screen
pub const BG_MENU: &str = "bg-menu.png";
pub const BG_NOT_FOUND: &str = "bg-404.png";
pub const BG_GAME: &str = "bg-game.png";
pub const BG_WIN: &str = "bg-win.png";

/// One rendered screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "scene", rename_all = "snake_case")]
pub enum Scene {
    Menu {
        background: &'static str,
    },
    NotFound {
        background: &'static str,
    },
    Playing(Frame),
    Won(WinCard),
}

impl Scene {
    pub fn background(&self) -> &'static str {
        match self {
            Scene::Menu { background } | Scene::NotFound { background } => *background,
            Scene::Playing(frame) => frame.background,
            Scene::Won(card) => card.background,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Scene::NotFound { .. })
    }
}

/// A game in progress
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub background: &'static str,
    pub geometry: Geometry,
    /// `grid[y][x]`, 0 = wall, 1 = path
    pub grid: Vec<Vec<u8>>,
    pub player: Cell,
    pub goal: Cell,
    /// Every move in the token, including ones that hit a wall
    pub move_count: usize,
    pub maze_number: String,
    pub local_time: String,
}

/// A solved maze: only the two labels are drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinCard {
    pub background: &'static str,
    pub maze_number: String,
    pub moves: String,
    pub maze_number_font_size: u32,
    pub moves_font_size: u32,
}

/// Fixed layout constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Geometry {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub columns: usize,
    pub rows: usize,
    pub top_left: Pixel,
    pub bottom_right: Pixel,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            columns: MAZE_WIDTH,
            rows: MAZE_HEIGHT,
            top_left: MAZE_TOP_LEFT.into(),
            bottom_right: MAZE_BOTTOM_RIGHT.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
}

impl From<Point> for Pixel {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// A grid cell with its pixel origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub left: u32,
    pub top: u32,
}

impl From<Position> for Cell {
    fn from(pos: Position) -> Self {
        let px = pos.to_pixel();
        Self {
            x: pos.x,
            y: pos.y,
            left: px.x,
            top: px.y,
        }
    }
}

/// Build the scene for a request path at `now`
pub fn build_scene(path: &str, now: DateTime<Utc>) -> Scene {
    match Route::from_path(path) {
        Route::Menu => Scene::Menu {
            background: BG_MENU,
        },
        Route::NotFound => Scene::NotFound {
            background: BG_NOT_FOUND,
        },
        Route::Play { moves } => {
            let seed = today_seed(now);
            let maze = Maze::generate(&seed);
            let outcome = replay(&moves, &maze);

            tracing::debug!(
                seed = %seed,
                moves = moves.len(),
                x = outcome.position.x,
                y = outcome.position.y,
                reached_goal = outcome.reached_goal,
                "replayed move token"
            );

            let number = maze_number(now);
            if outcome.reached_goal {
                Scene::Won(WinCard::new(number, moves.len()))
            } else {
                Scene::Playing(Frame {
                    background: BG_GAME,
                    geometry: Geometry::default(),
                    grid: maze.to_grid_vec(),
                    player: outcome.position.into(),
                    goal: GOAL.into(),
                    move_count: moves.len(),
                    maze_number: number,
                    local_time: local_time(now),
                })
            }
        }
    }
}

impl WinCard {
    fn new(maze_number: String, move_count: usize) -> Self {
        let moves = move_count.to_string();
        Self {
            background: BG_WIN,
            maze_number_font_size: fit_font_size(&maze_number, WIN_NUMBER_MAX_WIDTH, WIN_FONT_SIZE),
            moves_font_size: fit_font_size(&moves, WIN_MOVES_MAX_WIDTH, WIN_FONT_SIZE),
            maze_number,
            moves,
        }
    }
}

/// Largest font size (up to `font_size`) at which `text` fits in `max_width`
///
/// Assumes a monospace face whose glyphs are 0.6 em wide.
pub fn fit_font_size(text: &str, max_width: u32, font_size: u32) -> u32 {
    let estimated = text.chars().count() as f64 * font_size as f64 * 0.6;
    if estimated <= max_width as f64 {
        return font_size;
    }
    (font_size as f64 * (max_width as f64 / estimated)).floor() as u32
}
