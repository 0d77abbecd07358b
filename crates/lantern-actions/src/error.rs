//! Error types for the action catalog.
//!
//! Lookups used while drawing editors keep their total fallbacks; the
//! mutation API and the `find_*` lookups report absence through these types.

use std::path::PathBuf;

use thiserror::Error;

use lantern_core::ActionCategory;

/// Error type for catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No action type has this file name.
    #[error("Action type '{0}' not found")]
    UnknownType(String),

    /// The action type exists but is disabled.
    #[error("Action type '{0}' is not enabled")]
    NotEnabled(String),

    /// Index into the enabled set is out of range.
    #[error("Index {index} out of range for {len} enabled action types")]
    IndexOutOfRange { index: usize, len: usize },

    /// Another action type already uses this file name.
    #[error("Duplicate action file name '{0}'")]
    DuplicateFileName(String),

    /// Another action type already uses this category and title.
    #[error("Duplicate action title '{category}: {title}'")]
    DuplicateTitle {
        category: ActionCategory,
        title: String,
    },
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error type for action type discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// File or folder could not be read.
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest could not be parsed.
    #[error("Failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Lua runtime error.
    #[error("Lua error: {0}")]
    Lua(#[from] mlua::Error),
}

/// Result type alias for discovery.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;
