//! Request routing by final path segment

use maze_core::Move;

use crate::token::{parse_moves, IMAGE_SUFFIX};

/// What a request path asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Bare `i.webp`: the menu image
    Menu,
    /// `<token>i.webp`: a game in progress
    Play { moves: Vec<Move> },
    /// Anything else
    NotFound,
}

impl Route {
    /// Classify a request path
    ///
    /// Only the text after the last `/` matters, so `/api/wi.webp` and
    /// `/wi.webp` route the same way.
    pub fn from_path(path: &str) -> Self {
        let segment = final_segment(path);

        if segment == IMAGE_SUFFIX {
            Route::Menu
        } else if !segment.ends_with(IMAGE_SUFFIX) {
            Route::NotFound
        } else {
            Route::Play {
                moves: parse_moves(&format!("/{}", segment)),
            }
        }
    }
}

/// Text after the last `/`, or the whole path when there is none
pub fn final_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
