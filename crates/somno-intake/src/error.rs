use somno_scoring::ScoringError;
use somno_store::StoreError;
use somno_validate::FieldErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    /// Field-scoped rejections, complete for the whole record. Nothing was
    /// persisted and the workflow cursor did not move.
    #[error("validation failed: {0}")]
    Validation(#[from] FieldErrors),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Calculator contract violation. Validators run first, so this is a
    /// bug, not user input.
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
