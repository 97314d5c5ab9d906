use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    #[error("input of {len} bytes exceeds the pipeline limit of {max}")]
    InputTooLong { len: usize, max: usize },

    #[error("annotation pipeline unavailable: {0}")]
    Unavailable(String),

    #[error("annotation pipeline returned malformed tokens: {0}")]
    InvalidOutput(String),
}
