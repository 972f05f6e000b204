use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid permutation: {reason}")]
    InvalidPermutation { reason: String },

    #[error("Invalid config: {field} must be at least 1, got {value}")]
    InvalidConfig { field: &'static str, value: u64 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
