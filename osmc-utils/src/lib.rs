//! Shared utility functions for OSMC crates.

/// Time utility functions
pub mod time {
    use chrono::{DateTime, NaiveDateTime, Utc};

    /// Timestamp format used by ERDDAP tabledap, e.g. "2020-03-12T23:59:00Z"
    pub const ERDDAP_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    /// Format a UTC timestamp the way ERDDAP expects it in constraints
    pub fn format_time(time: &DateTime<Utc>) -> String {
        time.format(ERDDAP_TIME_FORMAT).to_string()
    }

    /// Parse an ERDDAP timestamp ("YYYY-MM-DDTHH:MM:SSZ").
    /// Falls back to RFC 3339 for responses carrying fractional seconds.
    pub fn parse_time(s: &str) -> anyhow::Result<DateTime<Utc>> {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, ERDDAP_TIME_FORMAT) {
            return Ok(naive.and_utc());
        }
        Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
    }

    /// Parse a date-only string ("YYYY-MM-DD") as midnight UTC
    pub fn parse_date(s: &str) -> anyhow::Result<DateTime<Utc>> {
        use chrono::NaiveDate;
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")?;
        match date.and_hms_opt(0, 0, 0) {
            Some(naive) => Ok(naive.and_utc()),
            None => Err(anyhow::anyhow!("invalid date: {}", s)),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::TimeZone;

        #[test]
        fn test_parse_time() {
            let parsed = parse_time("2020-03-12T23:59:00Z").unwrap();
            let expected = Utc.with_ymd_and_hms(2020, 3, 12, 23, 59, 0).unwrap();
            assert_eq!(parsed, expected);
        }

        #[test]
        fn test_parse_time_fractional_seconds() {
            let parsed = parse_time("2020-03-12T23:59:00.000Z").unwrap();
            let expected = Utc.with_ymd_and_hms(2020, 3, 12, 23, 59, 0).unwrap();
            assert_eq!(parsed, expected);
        }

        #[test]
        fn test_format_and_parse_round_trip() {
            let time = Utc.with_ymd_and_hms(2023, 6, 15, 12, 30, 45).unwrap();
            let formatted = format_time(&time);
            assert_eq!(formatted, "2023-06-15T12:30:45Z");
            let parsed = parse_time(&formatted).unwrap();
            assert_eq!(parsed, time);
        }

        #[test]
        fn test_parse_date() {
            let parsed = parse_date("2023-06-15").unwrap();
            let expected = Utc.with_ymd_and_hms(2023, 6, 15, 0, 0, 0).unwrap();
            assert_eq!(parsed, expected);
        }

        #[test]
        fn test_parse_time_rejects_garbage() {
            assert!(parse_time("not a time").is_err());
        }
    }
}
