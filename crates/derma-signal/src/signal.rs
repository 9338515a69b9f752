//! Analysis signal types
//!
//! Wire shape of one completed scan, as produced by the AI analysis
//! collaborator. Field names follow the collaborator's camelCase JSON;
//! everything is optional on the wire and defaulted here, because the
//! engine must never fail on a partial response.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Default skin type used when the collaborator omits the field
pub(crate) const DEFAULT_SKIN_TYPE: &str = "normal";

fn default_skin_type() -> String {
    DEFAULT_SKIN_TYPE.to_string()
}

/// Deserialize a field, falling back to its default on a type mismatch
///
/// The collaborator occasionally returns a wrong-typed field (a string
/// where a number belongs); that must degrade to the field default, not
/// fail the whole response.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn lenient_skin_type<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(String::deserialize(value).unwrap_or_else(|_| default_skin_type()))
}

/// One scan result from the AI analysis collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSignal {
    /// Overall skin health score, 0-100. Used only for narrative advice.
    #[serde(default, deserialize_with = "lenient")]
    pub health_score: f64,
    /// Free-text skin classification ("oily", "dry and sensitive", ...).
    /// Matched by substring, never by exact value.
    #[serde(default = "default_skin_type", deserialize_with = "lenient_skin_type")]
    pub skin_type: String,
    /// Free-text issue strings ("acne", "redness", ...), in detection order
    #[serde(default, deserialize_with = "lenient")]
    pub detected_issues: Vec<String>,
    /// Estimated age, if the collaborator reports one
    #[serde(default, deserialize_with = "lenient")]
    pub age_estimate: Option<f64>,
    /// Facial symmetry score, if reported
    #[serde(default, deserialize_with = "lenient")]
    pub symmetry_score: Option<f64>,
    /// Named recommendation lists
    #[serde(default, deserialize_with = "lenient")]
    pub recommendations: Recommendations,
}

impl AnalysisSignal {
    /// Create a signal with the given skin type and defaults elsewhere
    #[inline]
    #[must_use]
    pub fn new(skin_type: impl Into<String>) -> Self {
        Self {
            skin_type: skin_type.into(),
            ..Self::default()
        }
    }

    /// With health score
    #[inline]
    #[must_use]
    pub fn with_health_score(mut self, score: f64) -> Self {
        self.health_score = score;
        self
    }

    /// With detected issues
    #[inline]
    #[must_use]
    pub fn with_issues(mut self, issues: Vec<String>) -> Self {
        self.detected_issues = issues;
        self
    }

    /// With recommendation lists
    #[inline]
    #[must_use]
    pub fn with_recommendations(mut self, recommendations: Recommendations) -> Self {
        self.recommendations = recommendations;
        self
    }

    /// Parse a collaborator response, falling back to defaults for any
    /// missing or wrong-typed field. A response that is not valid JSON
    /// (or not a JSON object) is the only error surface.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl Default for AnalysisSignal {
    fn default() -> Self {
        Self {
            health_score: 0.0,
            skin_type: default_skin_type(),
            detected_issues: Vec::new(),
            age_estimate: None,
            symmetry_score: None,
            recommendations: Recommendations::default(),
        }
    }
}

/// Named recommendation lists from the collaborator
///
/// The three known lists feed task generation; any other list the
/// collaborator invents is retained (in arrival order) for read access
/// but produces no tasks. Deserialization is per-list lenient: a list
/// that is not an array of strings defaults to empty (or is skipped,
/// for unknown names) without touching its siblings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    /// Items appended to the morning routine
    pub morning_routine: Vec<String>,
    /// Items appended to the night routine
    pub night_routine: Vec<String>,
    /// Lifestyle tips; deliberately folded into the morning routine
    pub lifestyle: Vec<String>,
    /// Any other named lists, kept but not turned into tasks
    #[serde(flatten)]
    pub extra: IndexMap<String, Vec<String>>,
}

impl<'de> Deserialize<'de> for Recommendations {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        fn take_list(fields: &mut IndexMap<String, Value>, key: &str) -> Vec<String> {
            fields
                .shift_remove(key)
                .and_then(|value| Vec::<String>::deserialize(value).ok())
                .unwrap_or_default()
        }

        let mut fields = IndexMap::<String, Value>::deserialize(deserializer)?;
        let morning_routine = take_list(&mut fields, "morningRoutine");
        let night_routine = take_list(&mut fields, "nightRoutine");
        let lifestyle = take_list(&mut fields, "lifestyle");
        let extra = fields
            .into_iter()
            .filter_map(|(key, value)| {
                Vec::<String>::deserialize(value).ok().map(|list| (key, list))
            })
            .collect();

        Ok(Self {
            morning_routine,
            night_routine,
            lifestyle,
            extra,
        })
    }
}

impl Recommendations {
    /// Create empty recommendation lists
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With morning-routine items
    #[inline]
    #[must_use]
    pub fn with_morning(mut self, items: Vec<String>) -> Self {
        self.morning_routine = items;
        self
    }

    /// With night-routine items
    #[inline]
    #[must_use]
    pub fn with_night(mut self, items: Vec<String>) -> Self {
        self.night_routine = items;
        self
    }

    /// With lifestyle items
    #[inline]
    #[must_use]
    pub fn with_lifestyle(mut self, items: Vec<String>) -> Self {
        self.lifestyle = items;
        self
    }

    /// True if no known list carries any item
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.morning_routine.is_empty() && self.night_routine.is_empty() && self.lifestyle.is_empty()
    }
}

/// Lightweight per-scan metrics shown on the routine screen
///
/// Set directly by the scanning UI alongside the full analysis signal;
/// never consumed by task generation. Every field is optional because
/// the scanner reports only what it measured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    /// Free-text skin classification, if measured
    #[serde(default, deserialize_with = "lenient")]
    pub skin_type: Option<String>,
    /// Hydration percentage, if measured
    #[serde(default, deserialize_with = "lenient")]
    pub hydration: Option<f64>,
    /// Acne severity on a 0-10 scale, if measured
    #[serde(default, deserialize_with = "lenient")]
    pub acne: Option<f64>,
    /// Sensitivity score, if measured
    #[serde(default, deserialize_with = "lenient")]
    pub sensitivity: Option<f64>,
    /// Oiliness percentage, if measured
    #[serde(default, deserialize_with = "lenient")]
    pub oiliness: Option<f64>,
    /// One-line free-text recommendation, if given
    #[serde(default, deserialize_with = "lenient")]
    pub recommendation: Option<String>,
}
