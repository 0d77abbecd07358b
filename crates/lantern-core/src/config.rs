//! Configuration types.
//!
//! Action editing preferences live in `actions.toml` under the Lantern
//! config directory. Missing keys fall back to their defaults, so an empty
//! file is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How action nodes are laid out in the action list editor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DisplayActionsInEditor {
    #[default]
    ArrangedVertically,
    ArrangedHorizontally,
}

/// What the scroll wheel does in the action list editor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScrollWheelBehaviour {
    #[default]
    PansWindow,
    ZoomsWindow,
}

fn default_actions_folder() -> String {
    "Scripts/Actions".to_string()
}

/// Action editing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsSettings {
    /// List actions in the inspector window.
    pub display_actions_in_inspector: bool,

    pub display_actions_in_editor: DisplayActionsInEditor,

    pub allow_multiple_action_list_windows: bool,

    pub action_list_editor_scroll_wheel: ScrollWheelBehaviour,

    pub invert_panning: bool,

    /// Folder holding the built-in action scripts, relative to the data root.
    pub folder_path: String,

    /// Folder searched for custom action scripts, relative to the data root.
    /// Empty means the data root itself.
    pub custom_folder_path: String,

    /// File name of the default action type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_action: Option<String>,

    /// File names of action types the user disabled.
    pub disabled: Vec<String>,
}

impl Default for ActionsSettings {
    fn default() -> Self {
        Self {
            display_actions_in_inspector: true,
            display_actions_in_editor: DisplayActionsInEditor::default(),
            allow_multiple_action_list_windows: false,
            action_list_editor_scroll_wheel: ScrollWheelBehaviour::default(),
            invert_panning: false,
            folder_path: default_actions_folder(),
            custom_folder_path: default_actions_folder(),
            default_action: None,
            disabled: Vec::new(),
        }
    }
}

impl ActionsSettings {
    /// Parse settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let settings = Self::from_toml(&text)?;
        tracing::info!("Loaded action settings from {:?}", path);
        Ok(settings)
    }

    /// Load settings from the default location, or defaults if absent.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = settings_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            tracing::info!("No settings at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Write settings to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let io_err = |e: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, text).map_err(io_err)?;
        tracing::debug!("Saved action settings to {:?}", path);
        Ok(())
    }

    /// Point the custom actions folder at `chosen`, which must lie inside `data_root`.
    ///
    /// The path is stored relative to the data root.
    pub fn set_custom_folder(&mut self, data_root: &Path, chosen: &Path) -> Result<(), ConfigError> {
        let relative = chosen
            .strip_prefix(data_root)
            .map_err(|_| ConfigError::InvalidPath {
                path: chosen.to_path_buf(),
                root: data_root.to_path_buf(),
            })?;
        self.custom_folder_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        Ok(())
    }

    /// Absolute custom actions folder for a given data root.
    pub fn custom_folder(&self, data_root: &Path) -> PathBuf {
        if self.custom_folder_path.is_empty() {
            data_root.to_path_buf()
        } else {
            data_root.join(&self.custom_folder_path)
        }
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("lantern"))
}

/// Get the path to actions.toml.
pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("actions.toml"))
}
