//! The routine engine state holder

use crate::plan::{self, DailyPlan};
use chrono::{DateTime, Utc};
use derma_catalog::{
    apply_rules, default_routines, scan_base_routines, Period, RoutineSet, Task, SCAN_RULES,
};
use derma_signal::{validate, AnalysisSignal, ScanSummary, SignalError};

/// In-memory owner of the current routines and last-seen scan data
///
/// Constructed once by the application layer and passed by mutable
/// reference to whichever controller needs it; there is no ambient
/// singleton.
#[derive(Debug, Clone)]
pub struct RoutineEngine {
    routines: RoutineSet,
    scan_data: Option<ScanSummary>,
    analysis: Option<AnalysisSignal>,
    daily_plan: Option<DailyPlan>,
    last_scan_at: Option<DateTime<Utc>>,
}

impl Default for RoutineEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutineEngine {
    /// Create an engine holding the first-run default routine
    #[must_use]
    pub fn new() -> Self {
        Self {
            routines: default_routines(),
            scan_data: None,
            analysis: None,
            daily_plan: None,
            last_scan_at: None,
        }
    }

    /// Current routine lists
    #[inline]
    #[must_use]
    pub fn routines(&self) -> &RoutineSet {
        &self.routines
    }

    /// Last scan metrics stored by [`set_scan_data`](Self::set_scan_data)
    #[inline]
    #[must_use]
    pub fn scan_data(&self) -> Option<&ScanSummary> {
        self.scan_data.as_ref()
    }

    /// Store the latest scan metrics for read access
    ///
    /// A pass-through slot written by the scanning screen; routine and
    /// plan generation never read it.
    pub fn set_scan_data(&mut self, summary: ScanSummary) {
        self.scan_data = Some(summary);
    }

    /// Last signal merged by [`update_from_scan`](Self::update_from_scan)
    #[inline]
    #[must_use]
    pub fn analysis(&self) -> Option<&AnalysisSignal> {
        self.analysis.as_ref()
    }

    /// Last plan produced by
    /// [`generate_daily_plan`](Self::generate_daily_plan)
    #[inline]
    #[must_use]
    pub fn daily_plan(&self) -> Option<&DailyPlan> {
        self.daily_plan.as_ref()
    }

    /// When the last scan was merged
    #[inline]
    #[must_use]
    pub fn last_scan_at(&self) -> Option<DateTime<Utc>> {
        self.last_scan_at
    }

    /// Flip completion of one task in one period's list
    ///
    /// Other tasks and periods are untouched. A missing id is a no-op
    /// returning `false`; UI call sites stay uncomplicated.
    pub fn toggle_task(&mut self, period: Period, task_id: &str) -> bool {
        let found = self.routines.period_mut(period).toggle(task_id);
        if !found {
            tracing::debug!(%period, task_id, "toggle ignored, no such task");
        }
        found
    }

    /// Regenerate all three routine lists from a fresh scan signal
    ///
    /// Deterministic and order-sensitive: start from the post-scan base
    /// catalog, apply the matching skin-type insertion rules, then append
    /// the collaborator's recommendation lists. The previous routine set
    /// is fully replaced; completion state never carries over. The raw
    /// signal is retained for read access.
    pub fn update_from_scan(&mut self, signal: &AnalysisSignal) {
        tracing::info!(skin_type = %signal.skin_type, "regenerating routines from scan");

        let mut routines = scan_base_routines();
        apply_rules(&mut routines, SCAN_RULES, signal);
        append_recommendations(&mut routines, signal);

        tracing::debug!(
            morning = routines.morning.len(),
            evening = routines.evening.len(),
            night = routines.night.len(),
            "routines regenerated"
        );

        self.routines = routines;
        self.analysis = Some(signal.clone());
        self.last_scan_at = Some(Utc::now());
    }

    /// Strict variant of [`update_from_scan`](Self::update_from_scan)
    ///
    /// Runs the opt-in signal validation first and leaves all state
    /// untouched when it fails. The permissive path never calls this.
    pub fn update_from_scan_strict(&mut self, signal: &AnalysisSignal) -> Result<(), SignalError> {
        validate(signal)?;
        self.update_from_scan(signal);
        Ok(())
    }

    /// Generate the detailed daily plan for a signal
    ///
    /// A pure function of the signal and the static catalogs; current
    /// toggle state plays no part. The plan is returned and also stored
    /// for read access.
    pub fn generate_daily_plan(&mut self, signal: &AnalysisSignal) -> DailyPlan {
        tracing::info!(skin_type = %signal.skin_type, score = signal.health_score, "generating daily plan");
        let plan = plan::build_plan(signal);
        self.daily_plan = Some(plan.clone());
        plan
    }
}

/// Append the collaborator's named recommendation lists as tasks
///
/// `morningRoutine` and `lifestyle` items go to the morning list (in that
/// order), `nightRoutine` items to the night list. Ids follow the
/// `rec-{list}-{index}` pattern; source order is preserved.
fn append_recommendations(routines: &mut RoutineSet, signal: &AnalysisSignal) {
    let recs = &signal.recommendations;

    for (index, name) in recs.morning_routine.iter().enumerate() {
        routines
            .morning
            .push(Task::new(format!("rec-morning-{index}"), name.clone()));
    }

    for (index, name) in recs.night_routine.iter().enumerate() {
        routines
            .night
            .push(Task::new(format!("rec-night-{index}"), name.clone()));
    }

    // Lifestyle tips fold into the morning list by design.
    for (index, name) in recs.lifestyle.iter().enumerate() {
        routines
            .morning
            .push(Task::new(format!("rec-lifestyle-{index}"), name.clone()));
    }
}
