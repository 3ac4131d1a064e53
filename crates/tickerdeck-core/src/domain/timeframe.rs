use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Named lookback window applied to a price series for charting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "7D")]
    SevenDays,
    #[serde(rename = "15D")]
    FifteenDays,
    #[serde(rename = "30D")]
    ThirtyDays,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "5Y")]
    FiveYears,
}

impl Timeframe {
    pub const ALL: [Self; 7] = [
        Self::OneDay,
        Self::SevenDays,
        Self::FifteenDays,
        Self::ThirtyDays,
        Self::SixMonths,
        Self::OneYear,
        Self::FiveYears,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::SevenDays => "7D",
            Self::FifteenDays => "15D",
            Self::ThirtyDays => "30D",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::FiveYears => "5Y",
        }
    }

    /// Lookback window in calendar days.
    pub const fn lookback_days(self) -> i64 {
        match self {
            Self::OneDay => 1,
            Self::SevenDays => 7,
            Self::FifteenDays => 15,
            Self::ThirtyDays => 30,
            Self::SixMonths => 180,
            Self::OneYear => 365,
            Self::FiveYears => 1825,
        }
    }

    /// Resolve a label, falling back to `1Y` for anything unrecognized.
    ///
    /// The fallback is defensive, not an error: an unknown chart toggle
    /// label must still render something sensible.
    pub fn resolve(label: &str) -> Self {
        Self::from_str(label).unwrap_or(Self::OneYear)
    }
}

impl Display for Timeframe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "1D" => Ok(Self::OneDay),
            "7D" => Ok(Self::SevenDays),
            "15D" => Ok(Self::FifteenDays),
            "30D" => Ok(Self::ThirtyDays),
            "6M" => Ok(Self::SixMonths),
            "1Y" => Ok(Self::OneYear),
            "5Y" => Ok(Self::FiveYears),
            other => Err(ValidationError::InvalidTimeframe {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_timeframe_labels() {
        let parsed = Timeframe::from_str("30d").expect("must parse");
        assert_eq!(parsed, Timeframe::ThirtyDays);
        assert_eq!(parsed.lookback_days(), 30);
    }

    #[test]
    fn rejects_invalid_timeframe() {
        let err = Timeframe::from_str("2W").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidTimeframe { .. }));
    }

    #[test]
    fn resolve_falls_back_to_one_year() {
        assert_eq!(Timeframe::resolve("nonsense"), Timeframe::OneYear);
        assert_eq!(Timeframe::resolve("5Y"), Timeframe::FiveYears);
    }

    #[test]
    fn lookback_table_matches_chart_toggles() {
        let days: Vec<i64> = Timeframe::ALL.iter().map(|t| t.lookback_days()).collect();
        assert_eq!(days, vec![1, 7, 15, 30, 180, 365, 1825]);
    }
}
