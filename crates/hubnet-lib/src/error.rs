use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the hubnet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the default dataset")]
    ProjectDirsUnavailable,

    /// Raised when a SQLite dataset lacks the hub/route tables.
    #[error("unsupported dataset schema; expected Hubs, Routes and RouteHubs tables")]
    UnsupportedSchema,

    /// Raised when a route references fewer than two hubs.
    #[error("route {route} references {hubs} hub(s); at least two are required")]
    MalformedRoute { route: String, hubs: usize },

    /// Raised when two hub records share the same reference key.
    #[error("duplicate hub id encountered: {id}")]
    DuplicateHubId { id: String },

    /// Wrapper for SQLite errors.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON snapshot parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
