//! Clock, daily seed, and display dates
//!
//! Library code never reads the wall clock directly. Callers hand in a
//! `DateTime<Utc>`, usually from a [`Clock`], and everything here converts
//! it to the puzzle's home timezone (UTC+8).

use chrono::{DateTime, Datelike, FixedOffset, Utc};
use maze_core::{day_index, UTC_OFFSET_SECONDS};

use crate::error::{Error, Result};

/// The puzzle's home timezone
pub const HOME_OFFSET: FixedOffset = match FixedOffset::east_opt(UTC_OFFSET_SECONDS) {
    Some(offset) => offset,
    None => panic!("UTC offset out of range"),
};

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to an RFC 3339 timestamp such as `2025-08-04T09:30:00+08:00`
    pub fn parse(input: &str) -> Result<Self> {
        parse_instant(input).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parse an RFC 3339 timestamp into UTC
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| Error::InvalidTimestamp {
            input: input.to_string(),
            source,
        })
}

/// Seed for the calendar day `now` falls on in UTC+8, e.g. `2025-8-4`
///
/// Month and day are not zero-padded.
pub fn today_seed(now: DateTime<Utc>) -> String {
    let local = now.with_timezone(&HOME_OFFSET);
    format!("{}-{}-{}", local.year(), local.month(), local.day())
}

/// Puzzle number for `now`, zero-padded to three digits
pub fn maze_number(now: DateTime<Utc>) -> String {
    format!("{:03}", day_index(now.timestamp_millis()))
}

/// Local wall-clock time in the `en-GB` 24-hour style: `04/08/2025, 13:05:09`
pub fn local_time(now: DateTime<Utc>) -> String {
    now.with_timezone(&HOME_OFFSET)
        .format("%d/%m/%Y, %H:%M:%S")
        .to_string()
}
