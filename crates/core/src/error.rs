#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Failure while persisting an uploaded image to the public directory.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A file with the target name is already present.
    #[error("Image file already exists: {path}")]
    AlreadyExists { path: String },

    /// Opening, writing, syncing or removing the file failed.
    #[error("Saving image {path} failed: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
