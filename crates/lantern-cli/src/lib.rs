//! Command-line front end for the Lantern action catalog.
//!
//! - `command` - argument parsing, execution and output formatting
//! - `project` - JSON project files searched by `lantern search`

pub mod command;
pub mod error;
pub mod project;

pub use command::{parse_args, run, Command, USAGE};
pub use error::{CliError, CliResult};
pub use project::ProjectFile;
