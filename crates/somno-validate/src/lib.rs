//! somno-validate
//!
//! Field-level constraints for candidate records. Pure — no persistence.
//! Every check runs, every failure is reported, so the form layer can show
//! the complete field → reason map in one round trip.

pub mod field_error;
pub mod forms;
pub mod patient;
pub mod sleep_study;

pub use field_error::{FieldError, FieldErrors};
pub use forms::validate_form;
pub use patient::validate_patient;
pub use sleep_study::validate_study;
