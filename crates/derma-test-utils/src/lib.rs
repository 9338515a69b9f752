//! Testing utilities for the derma workspace
//!
//! Shared fixtures and helpers: canned signals, engine setup, and a
//! tracing init for debugging test runs.

#![allow(missing_docs)]

use derma_routine::RoutineEngine;
use derma_signal::{AnalysisSignal, Recommendations};

/// Engine in its first-run state (default catalog, no scan seen)
pub fn setup_engine() -> RoutineEngine {
    RoutineEngine::new()
}

/// Signal for plainly oily skin, no issues or recommendations
pub fn oily_signal() -> AnalysisSignal {
    AnalysisSignal::new("oily skin").with_health_score(65.0)
}

/// Signal for dry and sensitive skin
pub fn dry_sensitive_signal() -> AnalysisSignal {
    AnalysisSignal::new("dry and sensitive")
        .with_health_score(55.0)
        .with_issues(vec!["dryness".to_string(), "sensitivity".to_string()])
}

/// Neutral signal carrying only recommendation lists
pub fn recommendation_signal(morning: &[&str], night: &[&str], lifestyle: &[&str]) -> AnalysisSignal {
    AnalysisSignal::new("normal").with_recommendations(
        Recommendations::new()
            .with_morning(morning.iter().map(ToString::to_string).collect())
            .with_night(night.iter().map(ToString::to_string).collect())
            .with_lifestyle(lifestyle.iter().map(ToString::to_string).collect()),
    )
}

/// Parse a raw collaborator JSON response, panicking on malformed JSON
pub fn signal_from_json(raw: &str) -> AnalysisSignal {
    AnalysisSignal::from_json(raw).expect("test signal JSON must parse")
}

/// Initialize tracing for a test run; safe to call repeatedly
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
