//! somno-intake
//!
//! The intake workflow: the fixed eight-form sequence a new patient walks
//! through, and the service that validates, derives, persists and then
//! points the caller at the next step. The current step is never stored —
//! it is re-derived from which form kinds already have records.

pub mod error;
pub mod report;
pub mod service;
pub mod session;

pub use error::IntakeError;
pub use report::{EpworthTrendPoint, StudyReport, epworth_trend, study_reports};
pub use service::IntakeService;
pub use session::{IntakeSession, IntakeStep};
