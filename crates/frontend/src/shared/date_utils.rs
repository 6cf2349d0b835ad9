/// Форматирование дат из ответов API (ISO 8601)
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "2024-03-15"
pub fn format_date(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02"
pub fn format_datetime(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    format_date(value)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
