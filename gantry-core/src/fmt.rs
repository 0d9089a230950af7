//! Display helpers for timestamps and durations
//!
//! The wire format carries millisecond-epoch timestamps; pages and CLI
//! views want "how long did this run" strings. Kept here so every surface
//! renders them the same way.

use chrono::{DateTime, Utc};

/// Render the interval between two optional instants as "1d 2h 3m 4s"
///
/// Open intervals (no end) run to `now`. Returns `None` when the start is
/// absent, matching the "not launched yet" display state.
pub fn duration_between(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<String> {
    let start = start?;
    let end = end.unwrap_or(now);
    let total_secs = (end - start).num_seconds().max(0);

    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{}d ", days));
    }
    if days > 0 || hours > 0 {
        out.push_str(&format!("{}h ", hours));
    }
    if days > 0 || hours > 0 || minutes > 0 {
        out.push_str(&format!("{}m ", minutes));
    }
    out.push_str(&format!("{}s", seconds));
    Some(out)
}

/// Render an optional instant for display, "N/A" when absent
pub fn timestamp_string(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_duration_requires_start() {
        assert_eq!(duration_between(None, Some(at(100)), at(200)), None);
    }

    #[test]
    fn test_duration_closed_interval() {
        let s = duration_between(Some(at(0)), Some(at(90_061)), at(999_999)).unwrap();
        assert_eq!(s, "1d 1h 1m 1s");
    }

    #[test]
    fn test_duration_open_interval_uses_now() {
        let s = duration_between(Some(at(0)), None, at(125)).unwrap();
        assert_eq!(s, "2m 5s");
    }

    #[test]
    fn test_duration_short_interval_omits_leading_units() {
        let s = duration_between(Some(at(0)), Some(at(42)), at(42)).unwrap();
        assert_eq!(s, "42s");
    }

    #[test]
    fn test_timestamp_string() {
        assert_eq!(timestamp_string(None), "N/A");
        assert_eq!(timestamp_string(Some(at(0))), "1970-01-01 00:00:00 UTC");
    }
}
