use std::fmt;

// === RepositoryError ===

/// Errors related to bookmark and history persistence operations.
#[derive(Debug)]
pub enum RepositoryError {
    /// Row with the given ID was not found.
    NotFound(i64),
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::NotFound(id) => write!(f, "Row not found: {}", id),
            RepositoryError::DatabaseError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for RepositoryError {}

impl From<rusqlite::Error> for RepositoryError {
    fn from(e: rusqlite::Error) -> Self {
        RepositoryError::DatabaseError(e.to_string())
    }
}

// === FetcherError ===

/// Errors related to building the metadata fetcher.
///
/// Fetching itself is infallible by contract — failures degrade to default
/// `WebInfo` fields — so only client construction can error.
#[derive(Debug)]
pub enum FetcherError {
    /// The HTTP client could not be constructed.
    ClientBuild(String),
}

impl fmt::Display for FetcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetcherError::ClientBuild(msg) => write!(f, "Fetcher client build failed: {}", msg),
        }
    }
}

impl std::error::Error for FetcherError {}

// === AppError ===

/// Errors raised while assembling the application core.
#[derive(Debug)]
pub enum AppError {
    Database(String),
    Repository(RepositoryError),
    Fetcher(FetcherError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(msg) => write!(f, "Database init failed: {}", msg),
            AppError::Repository(e) => write!(f, "Repository init failed: {}", e),
            AppError::Fetcher(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Database(e.to_string())
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Repository(e)
    }
}

impl From<FetcherError> for AppError {
    fn from(e: FetcherError) -> Self {
        AppError::Fetcher(e)
    }
}
