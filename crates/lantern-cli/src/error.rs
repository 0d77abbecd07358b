//! CLI error type.

use std::path::PathBuf;

use thiserror::Error;

use lantern_actions::{CatalogError, DiscoveryError};
use lantern_core::ConfigError;

/// Anything that stops a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command line.
    #[error("{0}\n\n{usage}", usage = crate::command::USAGE)]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Project file could not be read or parsed.
    #[error("Failed to load project {path:?}: {message}")]
    Project { path: PathBuf, message: String },
}

pub type CliResult<T> = Result<T, CliError>;
