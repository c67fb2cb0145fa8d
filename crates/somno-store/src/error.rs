use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("patient not found: {id}")]
    PatientNotFound { id: Uuid },

    #[error("form not found: {id}")]
    FormNotFound { id: Uuid },

    #[error("duplicate patient id: {0}")]
    DuplicatePatientId(String),

    #[error("duplicate national id: {0}")]
    DuplicateNationalId(String),
}
