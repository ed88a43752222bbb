//! Error types for itemsync-core

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or running a behavior
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No project with the configured name exists in the tracker
    #[error("Could not find project: {name}")]
    ProjectNotFound { name: String },

    /// A configured custom column does not exist on its view
    #[error("Could not find custom column: {column}")]
    ColumnNotFound { column: String },

    // Transparent wrappers for underlying crate errors
    /// Host error from itemsync-host
    #[error(transparent)]
    Host(#[from] itemsync_host::Error),

    /// Configuration error from itemsync-config
    #[error(transparent)]
    Config(#[from] itemsync_config::Error),
}
