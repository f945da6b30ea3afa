// src/domain/dates.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// The API mixes RFC 3339 (`2024-05-01T12:00:00.000000Z`), SQL-style
/// (`2024-05-01 12:00:00`) and bare dates.
pub fn parse_api_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Day-only rendering for table cells; unparseable input is shown as-is.
pub fn display_date(raw: Option<&str>) -> String {
    match raw {
        Some(r) => parse_api_date(r)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| r.to_string()),
        None => "—".to_string(),
    }
}

/// `yyyy-mm-dd` for `<input type="date">`.
pub fn date_input_value(raw: &str) -> String {
    parse_api_date(raw)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}
