//! Display formatting for server-supplied values. Everything here is pure so
//! the rendered output is a function of the fetched data and the clock value
//! passed in by the handler.

use chrono::{DateTime, Utc};

/// Ratio of the indexer's height to the node client's reported height,
/// formatted to exactly two decimals. A client that reports no blocks yet
/// renders as fully unsynced rather than dividing by zero.
pub fn sync_percentage(height: i64, client_blocks: i64) -> String {
    if client_blocks <= 0 {
        return "0.00".to_string();
    }
    format!("{:.2}", height as f64 * 100.0 / client_blocks as f64)
}

pub fn is_synced(height: i64, client_blocks: i64) -> bool {
    client_blocks > 0 && height >= client_blocks
}

/// Truncated txid for table rows: the tail after the 32nd character, suffixed
/// with "...". Short ids collapse to just the suffix.
pub fn short_txid(txid: &str) -> String {
    let tail: String = txid.chars().skip(32).collect();
    format!("{}...", tail)
}

/// Relative age of a unix-seconds timestamp, for the "Age" columns.
pub fn relative_age(time: i64, now: DateTime<Utc>) -> String {
    let elapsed = now.timestamp() - time;
    if elapsed <= 0 {
        return "just now".to_string();
    }
    if elapsed < 60 {
        plural(elapsed, "second")
    } else if elapsed < 3600 {
        plural(elapsed / 60, "minute")
    } else if elapsed < 86_400 {
        plural(elapsed / 3600, "hour")
    } else {
        plural(elapsed / 86_400, "day")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

/// Absolute timestamp for detail pages.
pub fn format_timestamp(secs: i64) -> String {
    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}

/// Time remaining until the halving date, broken down the way the countdown
/// widget displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

pub fn countdown_until(target_ms: i64, now_ms: i64) -> Countdown {
    let remaining = (target_ms - now_ms).max(0);
    Countdown {
        days: remaining / 86_400_000,
        hours: remaining / 3_600_000 % 24,
        minutes: remaining / 60_000 % 60,
        seconds: remaining / 1_000 % 60,
        milliseconds: remaining % 1_000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sync_percentage_has_two_decimals() {
        assert_eq!(sync_percentage(152_000, 304_000), "50.00");
        assert_eq!(sync_percentage(1, 3), "33.33");
        assert_eq!(sync_percentage(2, 3), "66.67");
        assert_eq!(sync_percentage(5, 5), "100.00");
    }

    #[test]
    fn sync_percentage_with_no_client_blocks_is_zero() {
        assert_eq!(sync_percentage(10, 0), "0.00");
        assert!(!is_synced(10, 0));
    }

    #[test]
    fn synced_at_or_past_client_height() {
        assert!(is_synced(5, 5));
        assert!(is_synced(6, 5));
        assert!(!is_synced(4, 5));
    }

    #[test]
    fn short_txid_keeps_tail_after_32_chars() {
        let txid = "0123456789abcdef0123456789abcdefTAILTAILTAILTAIL";
        assert_eq!(short_txid(txid), "TAILTAILTAILTAIL...");
    }

    #[test]
    fn short_txid_of_short_id_is_just_the_suffix() {
        assert_eq!(short_txid("abcdef"), "...");
    }

    #[test]
    fn relative_age_buckets() {
        let now = Utc.timestamp_opt(1_500_000_000, 0).unwrap();
        assert_eq!(relative_age(1_500_000_000 - 30, now), "30 seconds ago");
        assert_eq!(relative_age(1_500_000_000 - 90, now), "1 minute ago");
        assert_eq!(relative_age(1_500_000_000 - 7200, now), "2 hours ago");
        assert_eq!(relative_age(1_500_000_000 - 200_000, now), "2 days ago");
        assert_eq!(relative_age(1_500_000_001, now), "just now");
    }

    #[test]
    fn countdown_breakdown() {
        // 1 day, 1 hour, 1 minute, 1 second, 1 millisecond.
        let target = 90_061_001;
        let cd = countdown_until(target, 0);
        assert_eq!(
            cd,
            Countdown {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
                milliseconds: 1
            }
        );
    }

    #[test]
    fn countdown_past_target_is_zero() {
        let cd = countdown_until(100, 200);
        assert_eq!(
            cd,
            Countdown {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0,
                milliseconds: 0
            }
        );
    }

    #[test]
    fn timestamps_render_as_utc() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
        assert_eq!(format_timestamp(1_495_545_484), "2017-05-23 13:18:04");
    }
}
