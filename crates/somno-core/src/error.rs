use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown form kind: {0}")]
    UnknownFormKind(String),
}
