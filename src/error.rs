use thiserror::Error;

pub type Result<T> = std::result::Result<T, CasError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CasError {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("unsupported operation: {0}")]
    Unsupported(String),
    #[error("integer overflow: {0}")]
    Overflow(String),
}
