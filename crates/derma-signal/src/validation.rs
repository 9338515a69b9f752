//! Opt-in strict validation for analysis signals
//!
//! The engine itself is deliberately permissive: every field defaults and
//! nothing throws for data-shape reasons. Callers that want to reject a
//! malformed collaborator response (test harnesses, ingestion debugging)
//! run this layer in front of the engine instead.

use crate::signal::AnalysisSignal;

/// Validation failures for a strict-mode signal check
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    /// Health score outside the documented 0-100 range
    #[error("health score out of range: {score} (expected 0-100)")]
    ScoreOutOfRange { score: f64 },

    /// Skin type is empty or whitespace
    #[error("skin type is blank")]
    BlankSkinType,

    /// A detected issue entry is empty or whitespace
    #[error("detected issue {index} is blank")]
    BlankIssue { index: usize },

    /// A recommendation list entry is empty or whitespace
    #[error("recommendation list '{list}' entry {index} is blank")]
    BlankRecommendation { list: String, index: usize },
}

/// Strictly validate a signal
///
/// Never required by the engine; `update_from_scan` accepts anything.
pub fn validate(signal: &AnalysisSignal) -> Result<(), SignalError> {
    if !(0.0..=100.0).contains(&signal.health_score) {
        return Err(SignalError::ScoreOutOfRange {
            score: signal.health_score,
        });
    }

    if signal.skin_type.trim().is_empty() {
        return Err(SignalError::BlankSkinType);
    }

    for (index, issue) in signal.detected_issues.iter().enumerate() {
        if issue.trim().is_empty() {
            return Err(SignalError::BlankIssue { index });
        }
    }

    let lists = [
        ("morningRoutine", &signal.recommendations.morning_routine),
        ("nightRoutine", &signal.recommendations.night_routine),
        ("lifestyle", &signal.recommendations.lifestyle),
    ];
    for (name, list) in lists {
        for (index, item) in list.iter().enumerate() {
            if item.trim().is_empty() {
                return Err(SignalError::BlankRecommendation {
                    list: name.to_string(),
                    index,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Recommendations;

    #[test]
    fn default_signal_is_valid() {
        assert!(validate(&AnalysisSignal::default()).is_ok());
    }

    #[test]
    fn score_out_of_range_rejected() {
        let signal = AnalysisSignal::new("normal").with_health_score(120.0);
        let err = validate(&signal).unwrap_err();
        assert!(matches!(err, SignalError::ScoreOutOfRange { .. }));

        let signal = AnalysisSignal::new("normal").with_health_score(-1.0);
        assert!(validate(&signal).is_err());
    }

    #[test]
    fn blank_skin_type_rejected() {
        let signal = AnalysisSignal::new("   ");
        assert!(matches!(
            validate(&signal).unwrap_err(),
            SignalError::BlankSkinType
        ));
    }

    #[test]
    fn blank_recommendation_rejected() {
        let signal = AnalysisSignal::new("normal").with_recommendations(
            Recommendations::new().with_morning(vec!["Use serum".to_string(), " ".to_string()]),
        );
        let err = validate(&signal).unwrap_err();
        assert!(matches!(
            err,
            SignalError::BlankRecommendation { index: 1, .. }
        ));
    }
}
