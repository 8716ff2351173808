//! Formatting helpers for presenting summaries.

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

pub fn format_average(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.2}"),
        _ => "—".to_string(),
    }
}

/// `2024-01-01T09:15:00Z` -> `2024-01-01 09:15`. Unparseable stamps are shown trimmed but
/// otherwise as received.
pub fn format_uploaded_at(raw: &str) -> String {
    if let Ok(stamp) = OffsetDateTime::parse(raw, &Rfc3339) {
        if let Ok(label) = stamp.format(&format_description!("[year]-[month]-[day] [hour]:[minute]")) {
            return label;
        }
    }

    raw.chars()
        .take(16)
        .map(|c| if c == 'T' { ' ' } else { c })
        .collect()
}
