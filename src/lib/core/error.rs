use thiserror::Error;

/// Failures inside the document store. Always a system fault, never the
/// client's doing.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("corrupt document: {0}")]
    Corrupt(String),
}

/// Everything a request handler can fail with. Validation variants are
/// client-caused and map to 400; `Store` maps to a 5xx payload.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid todo id: {0:?}")]
    InvalidId(String),
    #[error("title is required")]
    EmptyTitle,
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),
}
