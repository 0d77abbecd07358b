//! Custom action script discovery.
//!
//! Every `*.lua` file directly inside the custom actions folder declares
//! one action type. The script returns a table; the file stem becomes the
//! action's file name:
//!
//! ```lua
//! -- Scripts/Actions/ActionWave.lua
//! return {
//!   category = "Character",        -- required, any category name
//!   title = "Wave",                -- required
//!   description = "Waves a hand.", -- optional
//!   enabled = true,                -- optional, default true
//! }
//! ```
//!
//! Each script runs in its own Lua state, so globals never leak between
//! scripts. A script that fails to load or returns a malformed table is
//! logged and skipped; the rest of the folder is still discovered.

use std::path::{Path, PathBuf};

use mlua::{Lua, Result as LuaResult, Table};

use lantern_core::{ActionCategory, ActionType};

use super::DiscoveryProvider;
use crate::error::{DiscoveryError, DiscoveryResult};

/// Discovers custom action types from Lua scripts in a folder.
pub struct LuaScriptDiscovery {
    folder: PathBuf,
}

impl LuaScriptDiscovery {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Script paths in the folder, sorted by file name.
    fn script_paths(&self) -> DiscoveryResult<Vec<PathBuf>> {
        let io_err = |source: std::io::Error| DiscoveryError::Io {
            path: self.folder.clone(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&self.folder).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "lua") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

/// Parse the table returned by an action script.
fn parse_action_table(table: Table, file_name: String) -> LuaResult<ActionType> {
    let category: String = table
        .get::<Option<String>>("category")?
        .ok_or_else(|| mlua::Error::RuntimeError("Action script missing 'category'".into()))?;
    let category: ActionCategory = category.parse().map_err(mlua::Error::RuntimeError)?;

    let title: String = table
        .get::<Option<String>>("title")?
        .ok_or_else(|| mlua::Error::RuntimeError("Action script missing 'title'".into()))?;

    let description: Option<String> = table.get("description")?;
    let enabled: Option<bool> = table.get("enabled")?;

    Ok(ActionType {
        category,
        title,
        file_name,
        description: description.unwrap_or_default(),
        is_enabled: enabled.unwrap_or(true),
    })
}

/// Evaluate one script in a fresh state and read its action table.
fn load_script(path: &Path) -> DiscoveryResult<ActionType> {
    let code = std::fs::read_to_string(path).map_err(|source| DiscoveryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let lua = Lua::new();
    let table: Table = lua
        .load(code.as_str())
        .set_name(path.to_string_lossy().into_owned())
        .eval()?;

    Ok(parse_action_table(table, file_name)?)
}

impl DiscoveryProvider for LuaScriptDiscovery {
    fn name(&self) -> String {
        format!("scripts {}", self.folder.display())
    }

    fn discover(&self) -> DiscoveryResult<Vec<ActionType>> {
        if !self.folder.is_dir() {
            tracing::warn!("Custom actions folder {:?} not found", self.folder);
            return Ok(Vec::new());
        }

        let mut types = Vec::new();

        for path in self.script_paths()? {
            match load_script(&path) {
                Ok(action_type) => {
                    tracing::debug!("Loaded custom action {:?}", path);
                    types.push(action_type);
                }
                Err(e) => {
                    tracing::warn!("Skipping action script {:?}: {}", path, e);
                }
            }
        }

        Ok(types)
    }
}
