use crate::domain::market_data::SampleTimestamp;
use chrono::{DateTime, NaiveDateTime, Utc};

const CLOCK_FORMAT: &str = "%H:%M:%S";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Axis label for a sample timestamp, in UTC.
///
/// - epoch milliseconds -> `HH:MM:SS`
/// - RFC 3339 strings -> `HH:MM:SS` after converting the offset to UTC
/// - ISO date-times without an offset are taken as UTC
/// - anything else is shown as sent
pub fn format_sample_time(timestamp: &SampleTimestamp) -> String {
    match timestamp {
        SampleTimestamp::Millis(ms) => parse_millis(*ms)
            .map(|t| t.format(CLOCK_FORMAT).to_string())
            .unwrap_or_else(|| ms.to_string()),
        SampleTimestamp::Text(text) => parse_text(text)
            .map(|t| t.format(CLOCK_FORMAT).to_string())
            .unwrap_or_else(|| text.clone()),
    }
}

fn parse_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(ms as i64)
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(text) {
        return Some(t.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::format_sample_time;
    use crate::domain::market_data::SampleTimestamp;

    #[test]
    fn epoch_millis_render_as_utc_clock() {
        assert_eq!(format_sample_time(&SampleTimestamp::from(0u64)), "00:00:00");
        // 2023-11-14T22:13:20Z
        assert_eq!(format_sample_time(&SampleTimestamp::from(1_700_000_000_000u64)), "22:13:20");
    }

    #[test]
    fn iso_strings_are_trimmed_to_the_clock() {
        assert_eq!(format_sample_time(&SampleTimestamp::from("2024-01-01T10:05:09Z")), "10:05:09");
        assert_eq!(format_sample_time(&SampleTimestamp::from("2024-01-01T10:05:09.250")), "10:05:09");
        assert_eq!(format_sample_time(&SampleTimestamp::from("2024-01-01 10:05:09")), "10:05:09");
    }

    #[test]
    fn offsets_are_converted_to_utc() {
        assert_eq!(
            format_sample_time(&SampleTimestamp::from("2024-01-01T10:05:09+05:00")),
            "05:05:09"
        );
        assert_eq!(
            format_sample_time(&SampleTimestamp::from("2024-01-01T23:30:00-02:00")),
            "01:30:00"
        );
    }

    #[test]
    fn unparseable_values_are_shown_as_sent() {
        assert_eq!(format_sample_time(&SampleTimestamp::from("10:05")), "10:05");
        assert_eq!(format_sample_time(&SampleTimestamp::Millis(f64::NAN)), "NaN");
    }
}
