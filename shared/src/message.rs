//! Reminder text formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Zone used when none is configured; matches the zh-TW locale convention.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Taipei;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-ish date string into a point in time.
///
/// Strings without an offset are wall-clock times in `tz`, except bare dates
/// which are UTC midnight.
pub fn parse_date(input: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Render `input` as zero-padded 24-hour `HH:MM` in `tz`, or `""` if unparsable.
pub fn format_time(input: &str, tz: Tz) -> String {
    parse_date(input, tz)
        .map(|dt| dt.with_timezone(&tz).format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Fill the bilingual reminder template.
pub fn reminder_text(time: &str) -> String {
    format!(
        "嗨嗨~🔉預約提醒通知\n我們明天 {time} 見唷🌝🌝\n\nHi there! Reservation reminder: see you tomorrow at {time} 🌝"
    )
}

/// Build the full reminder message for an appointment date.
pub fn compose(date: &str, tz: Tz) -> String {
    reminder_text(&format_time(date, tz))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_date_formats_in_taipei() {
        assert_eq!(format_time("2024-01-01T09:30:00+08:00", DEFAULT_TIMEZONE), "09:30");
    }

    #[test]
    fn test_utc_date_converts_to_zone() {
        assert_eq!(format_time("2024-01-01T01:05:00Z", DEFAULT_TIMEZONE), "09:05");
        assert_eq!(format_time("2024-01-01T16:00:00.000Z", DEFAULT_TIMEZONE), "00:00");
    }

    #[test]
    fn test_naive_date_time_is_wall_clock() {
        assert_eq!(format_time("2024-01-01T14:00", DEFAULT_TIMEZONE), "14:00");
        assert_eq!(format_time("2024-01-01 07:45:00", DEFAULT_TIMEZONE), "07:45");
    }

    #[test]
    fn test_bare_date_is_utc_midnight() {
        assert_eq!(format_time("2024-01-01", DEFAULT_TIMEZONE), "08:00");
    }

    #[test]
    fn test_other_zone() {
        assert_eq!(
            format_time("2024-07-01T09:30:00+08:00", chrono_tz::America::New_York),
            "21:30"
        );
    }

    #[test]
    fn test_invalid_date_yields_empty_time() {
        assert_eq!(format_time("not-a-date", DEFAULT_TIMEZONE), "");
        assert_eq!(format_time("2024-13-45T99:99:00Z", DEFAULT_TIMEZONE), "");
        assert_eq!(format_time("", DEFAULT_TIMEZONE), "");
    }

    #[test]
    fn test_compose_embeds_time() {
        let message = compose("2024-01-01T09:30:00+08:00", DEFAULT_TIMEZONE);
        assert!(message.starts_with("嗨嗨~🔉預約提醒通知\n"));
        assert!(message.contains("我們明天 09:30 見唷"));
        assert!(message.contains("see you tomorrow at 09:30"));
    }

    #[test]
    fn test_compose_degrades_on_invalid_date() {
        let message = compose("not-a-date", DEFAULT_TIMEZONE);
        assert!(message.contains("我們明天  見唷"));
    }
}
