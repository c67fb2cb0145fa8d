//! somno-scoring
//!
//! Derived clinical metrics. Pure functions — no storage, no I/O. The
//! service layer calls these immediately before each persist so derived
//! fields are never entered by hand and never go stale.

pub mod error;
pub mod metrics;
pub mod severity;

pub use error::ScoringError;
pub use metrics::{bmi, epworth_total};
pub use severity::{AhiSeverity, EpworthSeverity};
