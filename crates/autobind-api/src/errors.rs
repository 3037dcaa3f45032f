use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating bindings
#[derive(Error, Debug)]
pub enum BindError {
    /// Header does not exist or could not be read
    #[error("Cannot read header {0}: {1}")]
    InputNotFound(PathBuf, #[source] std::io::Error),

    /// File too large
    #[error("File {0} exceeds maximum size ({1} bytes)")]
    FileTooLarge(PathBuf, u64),

    /// The grammar could not be loaded or the input could not be turned into a tree
    #[error("Parse failure in {0}: {1}")]
    ParseFailure(PathBuf, String),

    /// A node did not have the shape the extractor relies on
    #[error("Unexpected syntax shape in {0}:{1}:{2}: {3}")]
    StructuralMismatch(PathBuf, usize, usize, String),

    /// Configuration file could not be loaded
    #[error("Invalid configuration {0}: {1}")]
    Config(PathBuf, String),

    /// Writing generated bindings failed
    #[error("Failed to write bindings: {0}")]
    Output(#[source] std::io::Error),
}

/// Result type for binding operations
pub type BindResult<T> = Result<T, BindError>;
