use ward_core::WardError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid ontology configuration: {0}")]
    Config(String),
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("ontology request failed: {0}")]
    Request(reqwest::Error),
    #[error("ontology returned HTTP {status}: {error_name}")]
    Status {
        status: u16,
        error_name: String,
    },
    #[error("failed to decode ontology response: {0}")]
    Decode(reqwest::Error),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

impl From<ClientError> for WardError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Config(msg) => WardError::Config(msg),
            ClientError::Decode(e) => WardError::MalformedResponse(e.to_string()),
            other => WardError::Unavailable(other.to_string()),
        }
    }
}
