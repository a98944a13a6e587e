use thiserror::Error;

/// Result type for workspace operations
pub type Result<T> = std::result::Result<T, WorkspaceError>;

/// Errors that can occur reading from the project tree
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// Failed to read a file
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
