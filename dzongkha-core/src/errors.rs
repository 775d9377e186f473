use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("store unavailable: {0}")]
    StoreUnavailable(&'static str),
    #[error("invalid input: {0}")]
    Invalid(&'static str),
}
