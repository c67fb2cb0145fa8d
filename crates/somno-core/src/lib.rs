//! somno-core
//!
//! Pure domain types for the sleep clinic: the patient record, the eight
//! intake form records, sleep study results, and their child entries.
//! No I/O — this is the shared vocabulary of the Somno system.

pub mod error;
pub mod models;
