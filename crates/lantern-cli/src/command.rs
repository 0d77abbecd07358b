//! Command parsing and execution.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use lantern_actions::{
    ActionCatalog, ActionKind, ActionSearcher, ChainedDiscovery, DiscoveryProvider,
    LuaScriptDiscovery, ManifestDiscovery, MatchMode, SearchReport, SearchScope,
};
use lantern_core::{ActionsSettings, ConfigError};

use crate::error::{CliError, CliResult};
use crate::project::ProjectFile;

pub const USAGE: &str = "\
Usage:
  lantern list [--settings PATH] [--data-root DIR]
  lantern search <file_name> <project.json> [--exact] [--settings PATH]
  lantern help";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List {
        settings: Option<PathBuf>,
        data_root: PathBuf,
    },
    Search {
        file_name: String,
        project: PathBuf,
        exact: bool,
        settings: Option<PathBuf>,
    },
    Help,
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> CliResult<Command> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    let mut settings = None;
    let mut data_root = None;
    let mut exact = false;
    let mut positional = Vec::new();

    let mut iter = rest.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => settings = Some(PathBuf::from(flag_value(&mut iter, arg)?)),
            "--data-root" => data_root = Some(PathBuf::from(flag_value(&mut iter, arg)?)),
            "--exact" => exact = true,
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("Unknown option '{}'", flag)));
            }
            value => positional.push(value.to_string()),
        }
    }

    match command.as_str() {
        "list" => {
            expect_positional(&positional, 0)?;
            if exact {
                return Err(CliError::Usage("'--exact' only applies to search".into()));
            }
            Ok(Command::List {
                settings,
                data_root: data_root.unwrap_or_else(|| PathBuf::from(".")),
            })
        }
        "search" => {
            expect_positional(&positional, 2)?;
            if data_root.is_some() {
                return Err(CliError::Usage(
                    "'--data-root' is read from the project file for search".into(),
                ));
            }
            let mut positional = positional.into_iter();
            Ok(Command::Search {
                file_name: positional.next().unwrap_or_default(),
                project: PathBuf::from(positional.next().unwrap_or_default()),
                exact,
                settings,
            })
        }
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(CliError::Usage(format!("Unknown command '{}'", other))),
    }
}

fn flag_value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> CliResult<&'a str> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("Missing value for '{}'", flag)))
}

fn expect_positional(positional: &[String], count: usize) -> CliResult<()> {
    if positional.len() != count {
        return Err(CliError::Usage(format!(
            "Expected {} arguments, got {}",
            count,
            positional.len()
        )));
    }
    Ok(())
}

// =============================================================================
// Execution
// =============================================================================

/// Run a command and return what it prints.
pub fn run(command: Command) -> CliResult<String> {
    match command {
        Command::Help => Ok(USAGE.to_string()),
        Command::List {
            settings,
            data_root,
        } => {
            let settings = load_settings(settings.as_deref())?;
            let catalog = build_catalog(&settings, &data_root)?;
            Ok(render_list(&catalog))
        }
        Command::Search {
            file_name,
            project,
            exact,
            settings,
        } => {
            let settings = load_settings(settings.as_deref())?;
            let project_file = ProjectFile::load(&project)?;
            let data_root = project_file.data_root(&project);
            let catalog = build_catalog(&settings, &data_root)?;

            let kind = ActionKind::parse(&file_name);
            let target = catalog
                .get(kind.as_str())
                .ok_or_else(|| lantern_actions::CatalogError::UnknownType(kind.to_string()))?;

            let (mut scenes, roots) = project_file.into_parts();
            let mode = if exact {
                MatchMode::Exact
            } else {
                MatchMode::Permissive
            };
            let mut searcher = ActionSearcher::new(mode);
            let report = searcher.find_instances(
                SearchScope::Global {
                    roots: &roots,
                    scenes: &mut scenes,
                },
                &target,
            );
            Ok(render_report(&report))
        }
    }
}

/// Settings from an explicit path, or the default location.
///
/// Without a config directory, defaults are used.
fn load_settings(path: Option<&Path>) -> CliResult<ActionsSettings> {
    match path {
        Some(path) => Ok(ActionsSettings::load(path)?),
        None => match ActionsSettings::load_or_default() {
            Err(ConfigError::NoConfigDir) => {
                tracing::warn!("No config directory, using default settings");
                Ok(ActionsSettings::default())
            }
            other => Ok(other?),
        },
    }
}

/// Discover built-in and custom action types and apply user settings.
fn build_catalog(settings: &ActionsSettings, data_root: &Path) -> CliResult<ActionCatalog> {
    let discovery = ChainedDiscovery::new()
        .with(ManifestDiscovery::builtin())
        .with(LuaScriptDiscovery::new(settings.custom_folder(data_root)));

    let catalog = ActionCatalog::from_types(discovery.discover()?)?;
    catalog.apply_settings(settings);
    Ok(catalog)
}

// =============================================================================
// Output
// =============================================================================

pub fn render_list(catalog: &ActionCatalog) -> String {
    let snapshot = catalog.snapshot();
    let mut out = String::new();

    for (index, action_type) in snapshot.enabled.iter().enumerate() {
        let marker = if index == snapshot.default_index { "*" } else { " " };
        let _ = writeln!(
            out,
            "{} {:>3}  {:<40} {}",
            marker,
            index,
            action_type.full_title(),
            action_type.file_name
        );
    }

    let _ = write!(
        out,
        "{} of {} action types enabled",
        catalog.enabled_count(),
        catalog.all_count()
    );
    out
}

pub fn render_report(report: &SearchReport) -> String {
    let mut out = String::new();

    for hit in &report.hits {
        let location = match (&hit.scene, &hit.origin) {
            (Some(scene), _) => format!("scene {}", scene),
            (None, Some(origin)) => origin.clone(),
            (None, None) => "local".to_string(),
        };
        let _ = writeln!(
            out,
            "{:>4}  {} ({}) [{}]",
            hit.count, hit.name, hit.container, location
        );
    }

    let _ = write!(
        out,
        "Found {} instances of '{}' in {} of {} action lists across {} scenes",
        report.total(),
        report.target,
        report.hits.len(),
        report.containers_scanned,
        report.scenes_visited
    );
    out
}
