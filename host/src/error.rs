//! Error types for the host layer

use thiserror::Error;

/// Result type alias for host operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the pure maze pipeline
///
/// Scene building itself never fails; these cover operator input such as
/// pinned timestamps and server configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// A timestamp that is not valid RFC 3339
    #[error("invalid timestamp '{input}': {source}")]
    InvalidTimestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A configuration value that could not be parsed
    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: String,
    },
}
