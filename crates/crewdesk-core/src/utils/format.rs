use chrono::{DateTime, NaiveDate, Utc};

/// Format a phone number for display
/// Handles various input formats and normalizes to (XXX) XXX-XXXX
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        10 => format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10]),
        11 if digits.starts_with('1') => {
            format!("({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..11])
        }
        _ => phone.to_string(), // Return original if can't format
    }
}

/// Format an optional date for display, e.g. "Apr 12, 2021"
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%b %d, %Y").to_string(),
        None => "-".to_string(),
    }
}

/// Format an optional timestamp for display in local-agnostic UTC
pub fn format_datetime(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(timestamp) => timestamp.format("%b %d, %Y %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Format an optional string, returning a placeholder if None
pub fn format_optional(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
