//! Display formatting for fundamentals cards.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Badge tone for a fundamental rating label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Danger,
}

impl Tone {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl Display for Tone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a rating label to a badge tone.
///
/// Case-insensitive: `strong` is success, `weak` is danger, everything else
/// (including a missing label) is warning. Total function, no failure mode.
pub fn classify(label: Option<&str>) -> Tone {
    match label {
        Some(value) if value.eq_ignore_ascii_case("strong") => Tone::Success,
        Some(value) if value.eq_ignore_ascii_case("weak") => Tone::Danger,
        _ => Tone::Warning,
    }
}

/// Format a raw metric value with a magnitude suffix.
///
/// Missing or non-finite values render as `"-"`. Values at or above 1e3 are
/// scaled by the largest applicable unit of T/B/M/K; smaller values keep two
/// plain decimals.
pub fn format_magnitude(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return String::from("-");
    };

    const UNITS: [(f64, &str); 4] = [
        (1e12, "T"),
        (1e9, "B"),
        (1e6, "M"),
        (1e3, "K"),
    ];

    for (scale, suffix) in UNITS {
        if value >= scale {
            return format!("{:.2}{suffix}", value / scale);
        }
    }

    format!("{value:.2}")
}

/// Format a ratio as a percentage with two decimals.
pub fn format_percent(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(value) => format!("{:.2}%", value * 100.0),
        None => String::from("-"),
    }
}
