//! Move tokens embedded in request paths
//!
//! The client prepends each new keystroke to the token, so a path such as
//! `/dswi.webp` holds the moves newest first: `w`, then `s`, then `d`.
//! Parsing reverses the run back into play order.

use maze_core::Move;
use once_cell::sync::Lazy;
use regex::Regex;

/// Terminal marker that ends every image path
pub const IMAGE_SUFFIX: &str = "i.webp";

static TOKEN_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"/([a-z]*)i\.webp").ok());

/// Decode the move token in `path`, oldest move first
///
/// Returns an empty sequence when the pattern does not match. Letters
/// other than `wasd` become idle moves.
pub fn parse_moves(path: &str) -> Vec<Move> {
    let captures = TOKEN_RE.as_ref().and_then(|re| re.captures(path));
    let Some(run) = captures.as_ref().and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };

    run.as_str().chars().rev().map(Move::from_char).collect()
}

/// Build the newest-first token for a sequence given oldest first
///
/// Idle moves have no canonical letter and are written as `x`.
pub fn encode_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .rev()
        .map(|mv| mv.to_char().unwrap_or('x'))
        .collect()
}

/// Request path that replays `moves`
pub fn moves_path(moves: &[Move]) -> String {
    format!("/{}{}", encode_moves(moves), IMAGE_SUFFIX)
}
