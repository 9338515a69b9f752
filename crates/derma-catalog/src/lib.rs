//! Task model, catalogs, and insertion rules for routine personalization
//!
//! Holds everything static about routines:
//! - The task/period data model ([`Task`], [`TaskList`], [`RoutineSet`],
//!   [`Period`]).
//! - The hardcoded catalogs: the first-run default routine, the smaller
//!   post-scan base routine, and the larger detailed-plan step lists.
//!   The first two are intentionally distinct; the post-scan base omits
//!   a few first-run items (vitamins, the morning walk) and that
//!   asymmetry is preserved as given product behavior.
//! - The conditional insertion rules keyed off fuzzy skin-type/issue
//!   matching, expressed as named insert-after anchors rather than
//!   numeric-index splices.

#![warn(unreachable_pub)]

pub mod catalog;
pub mod insert;
pub mod period;
pub mod task;

pub use catalog::{default_routines, plan_steps, scan_base_routines};
pub use insert::{apply_rules, Anchor, InsertionRule, Trigger, PLAN_RULES, SCAN_RULES};
pub use period::{Period, PeriodParseError};
pub use task::{RoutineSet, Task, TaskId, TaskList};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
