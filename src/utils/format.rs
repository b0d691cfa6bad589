use chrono::{DateTime, Duration, Local, format::{Item, StrftimeItems}};

use super::time_format::format_timestamp;

/// Render an elapsed duration as `H:MM:SS`, with a day prefix once it spans a day.
pub fn format_elapsed(elapsed: &Duration) -> String {
    let negative = *elapsed < Duration::zero();
    let total = elapsed.num_seconds().unsigned_abs();

    let days = total / 86_400;
    let hours = (total % 86_400) / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let sign = if negative { "-" } else { "" };
    match days {
        0 => format!("{}{}:{:02}:{:02}", sign, hours, minutes, seconds),
        1 => format!("{}1 day, {}:{:02}:{:02}", sign, hours, minutes, seconds),
        n => format!("{}{} days, {}:{:02}:{:02}", sign, n, hours, minutes, seconds),
    }
}

pub fn format_points(points: f64) -> String {
    format!("{:.2}", points)
}

/// True when `pattern` contains no malformed strftime specifiers.
pub fn is_valid_strftime(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Format `date` with a user-provided strftime pattern, falling back to RFC 3339
/// when the pattern cannot be rendered.
pub fn format_with_pattern(date: &DateTime<Local>, pattern: &str) -> String {
    if is_valid_strftime(pattern) {
        date.format(pattern).to_string()
    } else {
        format_timestamp(date)
    }
}
