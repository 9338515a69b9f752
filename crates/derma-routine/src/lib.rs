//! Routine personalization engine
//!
//! The in-process state holder behind the checklist UI:
//! - Owns the current [`RoutineSet`], starting from the first-run
//!   default catalog.
//! - Regenerates all three period lists from a fresh scan signal
//!   (full replacement, no carry-over of completion state).
//! - Toggles per-task completion by id.
//! - Generates the richer detailed daily plan on demand.
//!
//! The engine is synchronous and single-threaded by design: the UI
//! framework serializes updates, so the owner holds it directly and
//! passes `&mut` references to whichever controller needs it. Nothing
//! here errors on data shape; every collaborator field defaults.
//!
//! # Example
//!
//! ```
//! use derma_routine::RoutineEngine;
//! use derma_signal::AnalysisSignal;
//! use derma_catalog::Period;
//!
//! let mut engine = RoutineEngine::new();
//! engine.update_from_scan(&AnalysisSignal::new("oily").with_health_score(72.0));
//!
//! assert!(engine.toggle_task(Period::Morning, "oily-1"));
//! let plan = engine.generate_daily_plan(&AnalysisSignal::new("oily"));
//! assert!(!plan.nutrition_tips.is_empty());
//! ```

#![warn(unreachable_pub)]

pub mod engine;
pub mod plan;

pub use engine::RoutineEngine;
pub use plan::{DailyPlan, RoutineSection, WeeklyTreatment};

// Re-exports for call sites that only depend on this crate
pub use derma_catalog::{Period, RoutineSet, Task, TaskId, TaskList};
pub use derma_signal::{AnalysisSignal, Recommendations, ScanSummary, ScoreBand, SignalError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
