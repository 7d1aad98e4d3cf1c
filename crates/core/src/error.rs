use ward_types::TextError;

/// Failure kinds shared by every gateway-backed operation.
#[derive(Debug, thiserror::Error)]
pub enum WardError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("bed not found: {0}")]
    NotFound(String),
    #[error("edit rejected by ontology validation ({0})")]
    ValidationFailed(String),
    #[error("ontology gateway unavailable: {0}")]
    Unavailable(String),
    #[error("malformed ontology response: {0}")]
    MalformedResponse(String),
}

impl From<TextError> for WardError {
    fn from(err: TextError) -> Self {
        WardError::InvalidInput(err.to_string())
    }
}

pub type WardResult<T> = std::result::Result<T, WardError>;
