use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryDeckError {
    #[error("Prefix already in use: {0}")]
    DuplicatePrefix(String),

    #[error("Invalid URL template: {0}")]
    InvalidTemplate(String),

    #[error("Cannot delete active provider: {0}")]
    CannotDeleteActiveProvider(String),

    #[error("Query not found: {0}")]
    QueryNotFound(String),

    #[error("Unknown search provider: {0}")]
    UnknownProvider(String),

    #[error("No default search provider configured")]
    NoDefaultProvider,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Malformed schema: {0}")]
    MalformedSchema(String),

    #[error("Unknown config key: {0}")]
    UnknownSetting(String),

    #[error("Invalid config value: {0}")]
    InvalidSetting(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, QueryDeckError>;
