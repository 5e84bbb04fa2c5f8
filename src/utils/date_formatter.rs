use crate::data_types::{AxisFormat, TimeUnit};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartDateFormat {
    Year,       // 2024
    MonthYear,  // Jan 2024
    DayMonth,   // 12 Jan
    HourMin,    // 10:30
    HourMinSec, // 10:30:15
}

impl SmartDateFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Year => "%Y",
            Self::MonthYear => "%b %Y",
            Self::DayMonth => "%d %b",
            Self::HourMin => "%H:%M",
            Self::HourMinSec => "%H:%M:%S",
        }
    }
}

/// Determines the best date format based on the visible time range (in seconds).
pub fn determine_date_format(visible_range_sec: f64) -> SmartDateFormat {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3600.0;
    const DAY: f64 = 24.0 * HOUR;
    const MONTH: f64 = 30.0 * DAY;
    const YEAR: f64 = 365.0 * DAY;

    if visible_range_sec > YEAR * 2.0 {
        SmartDateFormat::Year
    } else if visible_range_sec > MONTH * 2.0 {
        SmartDateFormat::MonthYear
    } else if visible_range_sec > DAY * 1.5 {
        SmartDateFormat::DayMonth
    } else if visible_range_sec > MINUTE * 5.0 {
        SmartDateFormat::HourMin
    } else {
        SmartDateFormat::HourMinSec
    }
}

fn to_datetime(value: f64, unit: TimeUnit) -> Option<DateTime<Utc>> {
    let seconds = unit.to_seconds(value);
    match Utc.timestamp_opt(seconds.floor() as i64, 0) {
        chrono::LocalResult::Single(d) => Some(d),
        chrono::LocalResult::Ambiguous(d, _) => Some(d),
        chrono::LocalResult::None => None,
    }
}

/// Formats a timestamp with a `strftime` pattern.
///
/// Falls back to the raw value when the timestamp or the pattern is invalid.
pub fn format_timestamp(value: f64, pattern: &str, unit: TimeUnit) -> String {
    let Some(dt) = to_datetime(value, unit) else {
        return format!("{:.2}", value);
    };
    let mut out = String::new();
    if write!(out, "{}", dt.format(pattern)).is_err() {
        return format!("{:.2}", value);
    }
    out
}

/// Formats both ends of an X range.
///
/// Time axes use `pattern`, or a format picked from the span when `pattern` is empty.
pub fn format_range(start: f64, end: f64, format: AxisFormat, pattern: &str) -> String {
    match format {
        AxisFormat::Time(unit) => {
            let pattern = if pattern.is_empty() {
                determine_date_format(unit.to_seconds((end - start).abs())).pattern()
            } else {
                pattern
            };
            format!(
                "{} - {}",
                format_timestamp(start, pattern, unit),
                format_timestamp(end, pattern, unit)
            )
        }
        AxisFormat::Numeric => format!("{} - {}", format_number(start), format_number(end)),
    }
}

fn format_number(value: f64) -> String {
    if value.abs() < 0.001 && value.abs() > 0.0 {
        format!("{:.4}", value)
    } else if value.abs() > 1000.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_format_from_span() {
        assert_eq!(determine_date_format(60.0), SmartDateFormat::HourMinSec);
        assert_eq!(determine_date_format(3.0 * 86_400.0), SmartDateFormat::DayMonth);
        assert_eq!(determine_date_format(5.0 * 365.0 * 86_400.0), SmartDateFormat::Year);
    }

    #[test]
    fn formats_millisecond_timestamps() {
        // 2024-01-02T00:00:00Z
        let ms = 1_704_153_600_000.0;
        assert_eq!(
            format_timestamp(ms, "%Y-%m-%d", TimeUnit::Milliseconds),
            "2024-01-02"
        );
    }

    #[test]
    fn numeric_range() {
        assert_eq!(format_range(5.0, 15.0, AxisFormat::Numeric, ""), "5.00 - 15.00");
    }
}
