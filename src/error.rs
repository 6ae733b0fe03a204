use thiserror::Error;

pub type VisualRangeResult<T> = Result<T, VisualRangeError>;

#[derive(Debug, Error)]
pub enum VisualRangeError {
    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
