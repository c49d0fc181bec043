use thiserror::Error;

/// Failure kinds for the create path.
///
/// Both variants are surfaced to the user through a redirect carrying
/// [`CreateError::code`] as the `error` query parameter.
#[derive(Error, Debug)]
pub enum CreateError {
    /// A required field was empty, or the target equals the source locale
    #[error("Translation request failed validation")]
    Validation,
    /// The underlying write did not succeed
    #[error("Failed to insert translation: {0}")]
    InsertFailed(#[source] StoreError),
}

impl CreateError {
    /// Machine-readable code carried across the redirect
    pub fn code(&self) -> &'static str {
        match self {
            CreateError::Validation => "invalid",
            CreateError::InsertFailed(_) => "insert_failed",
        }
    }
}

/// Errors raised by the translation record store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Insert into translations table failed: {0}")]
    InsertFailed(#[source] sqlx::Error),
    #[error("Query against translations table failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Errors raised while loading the host catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
