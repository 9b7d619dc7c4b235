use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default pattern used for date tick labels (`Mar 05`).
pub const DEFAULT_DATE_FORMAT: &str = "%b %d";

const FILE_SIZE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// How a tick value is rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickLabelFormat {
    /// Shortest decimal form of the value.
    Raw,
    /// Value is a byte count rendered with binary size units.
    Bytes,
    /// Value carries a date rendered with a strftime pattern.
    Date { pattern: String },
}

impl TickLabelFormat {
    #[must_use]
    pub fn date(pattern: impl Into<String>) -> Self {
        Self::Date {
            pattern: pattern.into(),
        }
    }
}

/// Renders one tick label. Pure in `value`, `date` and `format`.
///
/// Date formats fall back to the raw value when no date is attached or the
/// pattern cannot be rendered.
#[must_use]
pub fn format_tick_label(
    value: f64,
    date: Option<DateTime<Utc>>,
    format: &TickLabelFormat,
) -> String {
    match format {
        TickLabelFormat::Raw => format_number(value),
        TickLabelFormat::Bytes => format_file_size(value),
        TickLabelFormat::Date { pattern } => match date {
            Some(date) => format_date(date, pattern).unwrap_or_else(|| format_number(value)),
            None => format_number(value),
        },
    }
}

/// Shortest round-tripping decimal rendering, without a trailing `.0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // folds -0.0
        return "0".to_owned();
    }
    value.to_string()
}

/// Renders a byte count using 1024-based units, e.g. `1.5 KB`.
#[must_use]
pub fn format_file_size(bytes: f64) -> String {
    if !bytes.is_finite() {
        return format_number(bytes);
    }

    let sign = if bytes < 0.0 { "-" } else { "" };
    let mut value = bytes.abs();
    let mut unit = 0;
    while value >= 1024.0 && unit < FILE_SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        return format!("{sign}{} {}", value.round(), FILE_SIZE_UNITS[0]);
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{sign}{} {}", format_number(rounded), FILE_SIZE_UNITS[unit])
}

/// Returns `true` when chrono can render `pattern` without errors.
#[must_use]
pub fn is_valid_date_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

fn format_date(date: DateTime<Utc>, pattern: &str) -> Option<String> {
    if !is_valid_date_pattern(pattern) {
        return None;
    }
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}
