//! Host side of the daily maze
//!
//! Turns a request path and an instant into the facts an image renderer
//! needs. The pipeline is a chain of pure functions:
//!
//! 1. [`Route::from_path`] classifies the final path segment
//! 2. [`today_seed`] names the calendar day in UTC+8
//! 3. [`Maze::generate`] rebuilds that day's maze
//! 4. [`parse_moves`] decodes the move token, oldest move first
//! 5. [`replay`] walks the moves and checks for the goal
//! 6. [`build_scene`] packages the result as a [`Scene`]
//!
//! Nothing is cached or stored between calls.
//!
//! # Example
//! ```
//! use chrono::{TimeZone, Utc};
//! use daily_maze::{build_scene, Scene};
//!
//! let now = Utc.with_ymd_and_hms(2025, 8, 4, 4, 0, 0).unwrap();
//! match build_scene("/wi.webp", now) {
//!     Scene::Playing(frame) => assert_eq!(frame.move_count, 1),
//!     other => panic!("unexpected scene: {:?}", other),
//! }
//! ```

pub mod calendar;
pub mod error;
pub mod route;
pub mod scene;
pub mod token;

pub use calendar::{
    local_time, maze_number, parse_instant, today_seed, Clock, FixedClock, SystemClock,
};
pub use error::{Error, Result};
pub use route::Route;
pub use scene::{build_scene, fit_font_size, Frame, Geometry, Scene, WinCard};
pub use token::{encode_moves, moves_path, parse_moves};

pub use maze_core::{replay, Maze, Move, Position, Replay, GOAL, START};
