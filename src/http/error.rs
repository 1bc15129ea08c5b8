use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("no recipes matched")]
    NoResults,

    #[error("recipe not found")]
    NotFound,

    #[error("service returned no recipe")]
    ServiceUnavailable,
}
