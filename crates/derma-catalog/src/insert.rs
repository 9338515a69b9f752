//! Conditional insertion rules
//!
//! Extra tasks enter a routine when the scan signal matches a trigger.
//! Each rule names its anchor task instead of a numeric index, so the
//! catalogs can change shape without silently shifting insertion points.
//! Rules are applied in declaration order; when two rules share an
//! anchor, the later one lands closer to it.

use crate::period::Period;
use crate::task::{RoutineSet, Task};
use derma_signal::AnalysisSignal;

/// Condition deciding whether a rule fires for a signal
///
/// All matching is case-folded substring containment over the
/// collaborator's free text; triggers evaluate independently, so a skin
/// type like "oily and sensitive" can fire several rule groups at once.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Fires if the skin type mentions any of the needles
    SkinType(&'static [&'static str]),
    /// Fires if the skin type mentions the needle, or any detected issue
    /// mentions the issue needle
    SkinTypeOrIssue {
        /// Needle matched against the skin type
        skin: &'static str,
        /// Needle matched against each detected issue
        issue: &'static str,
    },
}

impl Trigger {
    /// Evaluate this trigger against a signal
    #[must_use]
    pub fn matches(&self, signal: &AnalysisSignal) -> bool {
        match self {
            Trigger::SkinType(needles) => needles
                .iter()
                .any(|needle| signal.skin_type_mentions(needle)),
            Trigger::SkinTypeOrIssue { skin, issue } => {
                signal.skin_type_mentions(skin) || signal.issue_mentions(issue)
            }
        }
    }
}

/// Where a conditional task enters its list
#[derive(Debug, Clone, Copy)]
pub enum Anchor {
    /// Immediately after the task with this id
    After(&'static str),
    /// At the end of the list
    Append,
}

/// One conditional task insertion
#[derive(Debug, Clone, Copy)]
pub struct InsertionRule {
    /// Condition under which the rule fires
    pub trigger: Trigger,
    /// Target period list
    pub period: Period,
    /// Insertion point within that list
    pub anchor: Anchor,
    /// Id of the inserted task
    pub id: &'static str,
    /// Name of the inserted task
    pub name: &'static str,
}

const OILY_SCAN: Trigger = Trigger::SkinType(&["oily", "acne"]);
const DRY_SCAN: Trigger = Trigger::SkinType(&["dry", "sensitive"]);

/// Rules applied when regenerating routines from a scan
///
/// The oily and dry branches are independent by design (not else-if); a
/// skin type mentioning both fires both groups.
pub static SCAN_RULES: &[InsertionRule] = &[
    InsertionRule {
        trigger: OILY_SCAN,
        period: Period::Morning,
        anchor: Anchor::After("5"),
        id: "oily-1",
        name: "Use oil-control toner/clay mask",
    },
    InsertionRule {
        trigger: OILY_SCAN,
        period: Period::Evening,
        anchor: Anchor::After("15"),
        id: "oily-2",
        name: "Apply sebum-control serum",
    },
    InsertionRule {
        trigger: DRY_SCAN,
        period: Period::Morning,
        anchor: Anchor::After("5"),
        id: "dry-1",
        name: "Apply hydrating essence/booster",
    },
    InsertionRule {
        trigger: DRY_SCAN,
        period: Period::Evening,
        anchor: Anchor::After("15"),
        id: "dry-2",
        name: "Use rich hydrating mask (2-3x weekly)",
    },
];

const OILY_PLAN: Trigger = Trigger::SkinTypeOrIssue {
    skin: "oily",
    issue: "acne",
};
const DRY_PLAN: Trigger = Trigger::SkinTypeOrIssue {
    skin: "dry",
    issue: "dryness",
};
const SENSITIVE_PLAN: Trigger = Trigger::SkinTypeOrIssue {
    skin: "sensitive",
    issue: "sensitivity",
};

/// Rules applied to the detailed daily-plan step lists
///
/// Anchors target the larger plan catalog; they are not shared with
/// [`SCAN_RULES`] because the base lists differ in length.
///
/// When the oily and dry groups both fire, each task sits behind its
/// own anchor, so the dry tasks land after `m5`/`e8` rather than
/// stacking next to the oily tasks the way the scan rules do. Pending
/// product confirmation of the dual-fire ordering.
pub static PLAN_RULES: &[InsertionRule] = &[
    InsertionRule {
        trigger: OILY_PLAN,
        period: Period::Morning,
        anchor: Anchor::After("m4"),
        id: "m-oily1",
        name: "Apply oil-control toner or clay mask",
    },
    InsertionRule {
        trigger: OILY_PLAN,
        period: Period::Evening,
        anchor: Anchor::After("e7"),
        id: "e-oily1",
        name: "Apply sebum-control serum or BHA toner",
    },
    InsertionRule {
        trigger: DRY_PLAN,
        period: Period::Morning,
        anchor: Anchor::After("m5"),
        id: "m-dry1",
        name: "Apply hydrating essence or booster",
    },
    InsertionRule {
        trigger: DRY_PLAN,
        period: Period::Evening,
        anchor: Anchor::After("e8"),
        id: "e-dry1",
        name: "Apply rich hydrating serum",
    },
    InsertionRule {
        trigger: SENSITIVE_PLAN,
        period: Period::Morning,
        anchor: Anchor::After("m1"),
        id: "m-sens1",
        name: "Use fragrance-free, gentle cleanser",
    },
    InsertionRule {
        trigger: SENSITIVE_PLAN,
        period: Period::Morning,
        anchor: Anchor::Append,
        id: "m-sens2",
        name: "Apply soothing essence with centella or aloe",
    },
];

/// Apply every matching rule to the routine set, in declaration order
pub fn apply_rules(set: &mut RoutineSet, rules: &[InsertionRule], signal: &AnalysisSignal) {
    for rule in rules {
        if !rule.trigger.matches(signal) {
            continue;
        }
        tracing::debug!(task = rule.id, period = %rule.period, "insertion rule fired");
        let task = Task::new(rule.id, rule.name);
        let list = set.period_mut(rule.period);
        match rule.anchor {
            Anchor::After(anchor_id) => list.insert_after(anchor_id, task),
            Anchor::Append => list.push(task),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{plan_steps, scan_base_routines};

    #[test]
    fn oily_trigger_matches_substring() {
        let signal = AnalysisSignal::new("Oily / Combination");
        assert!(OILY_SCAN.matches(&signal));
        assert!(!DRY_SCAN.matches(&signal));
    }

    #[test]
    fn scan_rules_oily_positions() {
        let mut set = scan_base_routines();
        apply_rules(&mut set, SCAN_RULES, &AnalysisSignal::new("oily skin"));

        assert_eq!(set.morning.position("oily-1"), Some(5));
        assert_eq!(set.evening.position("oily-2"), Some(3));
        assert!(set.morning.get("dry-1").is_none());
    }

    #[test]
    fn scan_rules_dry_positions() {
        let mut set = scan_base_routines();
        apply_rules(&mut set, SCAN_RULES, &AnalysisSignal::new("dry"));

        assert_eq!(set.morning.position("dry-1"), Some(5));
        assert_eq!(set.evening.position("dry-2"), Some(3));
    }

    #[test]
    fn scan_rules_both_branches_fire_independently() {
        let mut set = scan_base_routines();
        apply_rules(&mut set, SCAN_RULES, &AnalysisSignal::new("oily and sensitive"));

        // Dry tasks land directly behind the shared anchor, oily behind them.
        assert_eq!(set.morning.position("dry-1"), Some(5));
        assert_eq!(set.morning.position("oily-1"), Some(6));
        assert_eq!(set.evening.position("dry-2"), Some(3));
        assert_eq!(set.evening.position("oily-2"), Some(4));
    }

    #[test]
    fn plan_rules_issue_triggers() {
        let signal = AnalysisSignal::new("normal").with_issues(vec!["acne".to_string()]);
        let mut set = plan_steps();
        apply_rules(&mut set, PLAN_RULES, &signal);

        assert_eq!(set.morning.position("m-oily1"), Some(4));
        assert_eq!(set.evening.position("e-oily1"), Some(7));
    }

    #[test]
    fn plan_rules_dual_fire_keeps_each_task_behind_its_anchor() {
        let mut set = plan_steps();
        apply_rules(&mut set, PLAN_RULES, &AnalysisSignal::new("oily and dry"));

        // m1..m4, m-oily1, m5, m-dry1, m6..
        assert_eq!(set.morning.position("m-oily1"), Some(4));
        assert_eq!(set.morning.position("m-dry1"), Some(6));
        // e1..e7, e-oily1, e8, e-dry1, e9..
        assert_eq!(set.evening.position("e-oily1"), Some(7));
        assert_eq!(set.evening.position("e-dry1"), Some(9));
    }

    #[test]
    fn plan_rules_sensitive_inserts_and_appends() {
        let mut set = plan_steps();
        apply_rules(&mut set, PLAN_RULES, &AnalysisSignal::new("sensitive"));

        assert_eq!(set.morning.position("m-sens1"), Some(1));
        assert_eq!(
            set.morning.tasks().last().unwrap().id.as_str(),
            "m-sens2"
        );
    }

    #[test]
    fn no_trigger_no_change() {
        let mut set = scan_base_routines();
        let before = set.clone();
        apply_rules(&mut set, SCAN_RULES, &AnalysisSignal::new("normal"));
        assert_eq!(set, before);
    }
}
