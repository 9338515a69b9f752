//! Day periods
//!
//! The entire enumeration surface at the UI boundary is the literal set
//! `{"morning", "evening", "night"}`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fixed partition of the day's routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Morning routine
    Morning,
    /// Evening routine
    Evening,
    /// Night (pre-sleep) routine
    Night,
}

impl Period {
    /// All periods, in display order
    pub const ALL: [Period; 3] = [Period::Morning, Period::Evening, Period::Night];

    /// Wire/UI identifier for this period
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Evening => "evening",
            Period::Night => "night",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Period::Morning),
            "evening" => Ok(Period::Evening),
            "night" => Ok(Period::Night),
            other => Err(PeriodParseError::Unknown(other.to_string())),
        }
    }
}

/// Period string parse failure
#[derive(Debug, thiserror::Error)]
pub enum PeriodParseError {
    /// Not one of the three known period identifiers
    #[error("unknown period: '{0}' (expected morning, evening, or night)")]
    Unknown(String),
}
