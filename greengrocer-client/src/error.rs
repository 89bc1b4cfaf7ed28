use reqwest::StatusCode;

/// Client-visible failure outcomes.
///
/// `Rejected` means the service answered and said no; every other variant
/// means the request never completed as a service exchange. Callers that
/// need "did the server see this?" branch on that split.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status}: body was not a service envelope")]
    UnexpectedStatus { status: StatusCode },

    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("response envelope carried no data")]
    EmptyEnvelope,

    #[error("server rejected request: {0}")]
    Rejected(String),
}
