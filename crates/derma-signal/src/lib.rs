//! Signal contract for the external skin-analysis collaborator
//!
//! The vision/LLM endpoint returns a JSON object describing one scan:
//! a health score, a free-text skin type, detected issues, and named
//! recommendation lists. This crate owns that shape and the semantics
//! attached to it:
//! - Permissive deserialization: every field is optional and defaulted,
//!   so a partial or sloppy response never fails downstream.
//! - Fuzzy trait matching: skin type and issues are classified by
//!   case-folded substring containment, not by a closed enum.
//! - Score banding: the 0-100 health score collapses into three
//!   narrative bands.
//! - An explicit, opt-in strict validation layer for callers that want
//!   to reject malformed signals before handing them to the engine.

#![warn(unreachable_pub)]

pub mod matching;
pub mod signal;
pub mod validation;

pub use matching::{contains_fold, ScoreBand};
pub use signal::{AnalysisSignal, Recommendations, ScanSummary};
pub use validation::{validate, SignalError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
