//! Error types for the vmcatalog core library.
//!
//! Uses `thiserror` for public API error types. Lookup operations signal
//! "not found" with `Option`, never through this enum.

use std::path::PathBuf;

/// Top-level error type for the vmcatalog libraries.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// An install with the requested id is already registered with the
    /// owning install type. The collection is untouched when this is raised.
    #[error("Duplicate VM install: {id}")]
    DuplicateInstall { id: String },

    /// A location does not hold an installation the install type can manage.
    #[error("Invalid install location {path}: {reason}")]
    InvalidInstallLocation { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
