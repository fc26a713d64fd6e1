//! Shared utility functions for Velib tracker crates.

/// Duration and timestamp formatting
pub mod format {
    use anyhow::Context;
    use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
    use std::fmt::Display;

    /// Display format for timestamps shown to the user.
    pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Format a number of seconds as "1h 5m", or "5m" under an hour.
    pub fn format_duration(seconds: u64) -> String {
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        if hours > 0 {
            format!("{}h {}m", hours, minutes)
        } else {
            format!("{}m", minutes)
        }
    }

    /// Parse an ISO-8601 timestamp from the backend.
    ///
    /// Timestamps without an offset are UTC (the backend stores `utcnow()`).
    pub fn parse_timestamp(s: &str) -> anyhow::Result<DateTime<Utc>> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }
        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .with_context(|| format!("invalid timestamp: {}", s))?;
        Ok(Utc.from_utc_datetime(&naive))
    }

    /// Render a backend timestamp in `tz`.
    pub fn format_timestamp_in<Tz>(s: &str, tz: &Tz) -> anyhow::Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let dt = parse_timestamp(s)?;
        Ok(dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string())
    }

    /// Render a backend timestamp in the local timezone.
    pub fn format_timestamp(s: &str) -> anyhow::Result<String> {
        format_timestamp_in(s, &Local)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_duration() {
            assert_eq!(format_duration(0), "0m");
            assert_eq!(format_duration(59), "0m");
            assert_eq!(format_duration(754), "12m");
            assert_eq!(format_duration(3600), "1h 0m");
            assert_eq!(format_duration(3 * 3600 + 25 * 60 + 10), "3h 25m");
        }

        #[test]
        fn test_format_naive_timestamp_as_utc() {
            let formatted = format_timestamp_in("2024-05-01T10:20:30.123456", &Utc).unwrap();
            assert_eq!(formatted, "2024-05-01 10:20:30");
        }

        #[test]
        fn test_format_offset_timestamp() {
            let formatted = format_timestamp_in("2024-05-01T12:20:30+02:00", &Utc).unwrap();
            assert_eq!(formatted, "2024-05-01 10:20:30");
        }

        #[test]
        fn test_invalid_timestamp() {
            assert!(parse_timestamp("yesterday").is_err());
        }
    }
}

/// Page routes and search routing
pub mod routes {
    /// Detail page of a station.
    pub fn station_page(code: &str) -> String {
        format!("/stations/{}", code)
    }

    /// Detail page of a bike, by id or name.
    pub fn bike_page(name: &str) -> String {
        format!("/bikes/{}", name)
    }

    /// Where a search box submission should navigate.
    ///
    /// An all-digit query is a bike id; anything else searches stations.
    /// Blank queries go nowhere.
    pub fn search_target(query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        if query.bytes().all(|b| b.is_ascii_digit()) {
            Some(bike_page(query))
        } else {
            Some(format!("/stations?search={}", encode_uri_component(query)))
        }
    }

    /// Percent-encode like JavaScript's `encodeURIComponent`.
    pub fn encode_uri_component(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for byte in s.bytes() {
            match byte {
                b'A'..=b'Z'
                | b'a'..=b'z'
                | b'0'..=b'9'
                | b'-'
                | b'_'
                | b'.'
                | b'!'
                | b'~'
                | b'*'
                | b'\''
                | b'('
                | b')' => out.push(byte as char),
                _ => out.push_str(&format!("%{:02X}", byte)),
            }
        }
        out
    }

}
