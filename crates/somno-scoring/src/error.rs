use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    /// Contract violation — the validators reject out-of-range heights
    /// before the calculator ever runs.
    #[error("height must be positive, got {0}")]
    NonPositiveHeight(f64),
}
