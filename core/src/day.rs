//! Puzzle-number calendar
//!
//! The puzzle number counts whole days since the first published maze,
//! with days starting at midnight UTC+8. It is display-only and never
//! feeds into generation.

/// Offset of the puzzle's home timezone from UTC (UTC+8)
pub const UTC_OFFSET_SECONDS: i32 = 8 * 60 * 60;

pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// 2025-08-04T00:00:00+08:00, the day of maze number 1
pub const EPOCH_MILLIS: i64 = 1_754_236_800_000;

/// Day index for an instant given as Unix milliseconds
///
/// The epoch day is 1. Instants before the epoch clamp to 1.
pub fn day_index(now_millis: i64) -> u32 {
    let elapsed = (now_millis - EPOCH_MILLIS).div_euclid(MILLIS_PER_DAY);
    if elapsed < 0 {
        return 1;
    }
    u32::try_from(elapsed + 1).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 60 * 60 * 1000;

    #[test]
    fn test_epoch_is_day_one() {
        assert_eq!(day_index(EPOCH_MILLIS), 1);
    }

    #[test]
    fn test_rolls_over_at_local_midnight() {
        // 23:59:59.999 local on the epoch day
        assert_eq!(day_index(EPOCH_MILLIS + MILLIS_PER_DAY - 1), 1);
        assert_eq!(day_index(EPOCH_MILLIS + MILLIS_PER_DAY), 2);
        assert_eq!(day_index(EPOCH_MILLIS + 30 * MILLIS_PER_DAY + 8 * HOUR), 31);
    }

    #[test]
    fn test_before_epoch_clamps() {
        assert_eq!(day_index(EPOCH_MILLIS - 1), 1);
        assert_eq!(day_index(0), 1);
    }

    #[test]
    fn test_epoch_offset() {
        // Midnight UTC+8 is 16:00 UTC the previous day
        assert_eq!((EPOCH_MILLIS / 1000 + UTC_OFFSET_SECONDS as i64) % 86_400, 0);
    }
}
