//! Error types shared across Lantern crates.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error on {path:?}: {message}")]
    Io { path: PathBuf, message: String },

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A folder was chosen outside the project data root.
    #[error("Folder {path:?} is not inside the data root {root:?}")]
    InvalidPath { path: PathBuf, root: PathBuf },
}

/// Errors reported by scene loaders.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene file does not exist.
    #[error("Scene '{0}' not found")]
    NotFound(String),

    /// The scene exists but could not be opened.
    #[error("Failed to load scene '{scene}': {message}")]
    Load { scene: String, message: String },
}
