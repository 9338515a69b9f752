//! Fuzzy trait matching and score banding
//!
//! The collaborator reports skin type and issues as free text, and the
//! product classifies them by case-insensitive substring search. Call
//! sites depend on that looseness ("Oily / Combination" must trigger
//! the oily rules), so matching stays a substring check, never an enum.

use crate::signal::AnalysisSignal;

/// Case-folded substring containment
///
/// Both sides are lowercased before the search, so `"Oily Skin"` matches
/// the needle `"oily"`.
#[inline]
#[must_use]
pub fn contains_fold(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl AnalysisSignal {
    /// True if the free-text skin type mentions the needle (case-folded
    /// substring match)
    #[inline]
    #[must_use]
    pub fn skin_type_mentions(&self, needle: &str) -> bool {
        contains_fold(&self.skin_type, needle)
    }

    /// True if any detected issue mentions the needle (case-folded
    /// substring match per issue string)
    #[inline]
    #[must_use]
    pub fn issue_mentions(&self, needle: &str) -> bool {
        self.detected_issues
            .iter()
            .any(|issue| contains_fold(issue, needle))
    }

    /// Narrative band for this signal's health score
    #[inline]
    #[must_use]
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.health_score)
    }
}

/// Narrative band derived from the 0-100 health score
///
/// Bands select one advice string each; they never influence task
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    /// Score >= 80: skin is in excellent condition
    Excellent,
    /// Score >= 60: skin is doing well
    Good,
    /// Below 60: skin needs more targeted care
    NeedsCare,
}

impl ScoreBand {
    /// Band for a raw score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 60.0 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsCare
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn contains_fold_is_case_insensitive() {
        assert!(contains_fold("Oily / Combination", "oily"));
        assert!(contains_fold("dry", "DRY"));
        assert!(!contains_fold("normal", "oily"));
    }

    #[test]
    fn skin_type_mentions_substring() {
        let signal = AnalysisSignal::new("slightly oily T-zone");
        assert!(signal.skin_type_mentions("oily"));
        assert!(!signal.skin_type_mentions("dry"));
    }

    #[test]
    fn issue_mentions_any_entry() {
        let signal = AnalysisSignal::new("normal")
            .with_issues(vec!["mild Acne".to_string(), "redness".to_string()]);
        assert!(signal.issue_mentions("acne"));
        assert!(signal.issue_mentions("redness"));
        assert!(!signal.issue_mentions("dryness"));
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79.9), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(60.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(59.9), ScoreBand::NeedsCare);
        assert_eq!(ScoreBand::from_score(0.0), ScoreBand::NeedsCare);
    }

    proptest! {
        #[test]
        fn prop_band_is_total_over_score_range(score in 0.0f64..=100.0) {
            let band = ScoreBand::from_score(score);
            match band {
                ScoreBand::Excellent => prop_assert!(score >= 80.0),
                ScoreBand::Good => prop_assert!((60.0..80.0).contains(&score)),
                ScoreBand::NeedsCare => prop_assert!(score < 60.0),
            }
        }
    }
}
