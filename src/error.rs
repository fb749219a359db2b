use thiserror::Error;

/// Errors produced by the conversion library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// A decoded value was not text. `found` names the JSON kind that was received.
    #[error("Input must be a string")]
    InvalidInputType { found: &'static str },
}

pub type Result<T> = std::result::Result<T, CaseError>;
