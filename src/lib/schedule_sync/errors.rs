use std::time::Duration;

/// Failure of a single call to one of the external services.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

/// Failure of one of the state operations, with what the operation was working on.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Teacher search for {query:?} failed: {source}")]
    Search {
        query: String,
        #[source]
        source: FetchError,
    },

    #[error("Loading schedule of teacher {teacher_id} failed: {source}")]
    Pairs {
        teacher_id: String,
        #[source]
        source: FetchError,
    },
}
