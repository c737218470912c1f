//! Display helpers for the file-info and results panels.

use crate::config::MSG_NO_TEXT;

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const STEP: f64 = 1024.0;

/// Human-readable size using 1024-based units.
///
/// Picks the largest unit whose value is at least 1, rounds to two
/// decimals and drops trailing zeros. A value that would round up to
/// 1024 of a unit is shown in the next unit instead.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while unit < UNITS.len() - 1 && value >= STEP {
        value /= STEP;
        unit += 1;
    }

    let mut rounded = round2(value);
    if rounded >= STEP && unit < UNITS.len() - 1 {
        unit += 1;
        rounded = round2(rounded / STEP);
    }

    format!("{} {}", trim_decimals(rounded), UNITS[unit])
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn trim_decimals(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// MIME type for the file-info panel.
pub fn display_mime_type(mime_type: &str) -> &str {
    if mime_type.is_empty() {
        "Unknown"
    } else {
        mime_type
    }
}

/// Extracted text, or the placeholder when there is none.
pub fn display_text(text: Option<&str>) -> &str {
    match text {
        Some(t) if !t.is_empty() => t,
        _ => MSG_NO_TEXT,
    }
}

/// Text length line of the results panel.
pub fn display_text_length(length: u64) -> String {
    format!("{length} characters")
}
