//! Project files.
//!
//! A project is a JSON snapshot of everything a global search walks:
//!
//! ```json
//! {
//!   "data_root": "/games/dock",
//!   "scenes": [
//!     { "path": "Scenes/Dock", "action_lists": [
//!       { "id": "Scenes/Dock#Intro", "name": "Intro", "actions": [
//!         { "kind": "ActionSpeech", "category": "Dialogue", "title": "Play speech" }
//!       ] }
//!     ] }
//!   ],
//!   "roots": {
//!     "assets": [ { "id": "Assets/Unhandled", "actions": [] } ],
//!     "inventory": { "unhandled_hotspot": "Assets/Unhandled" }
//!   }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use lantern_actions::{ProjectScenes, SceneFile, SearchRoots};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Root that relative data paths resolve against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_root: Option<PathBuf>,

    #[serde(default)]
    pub scenes: Vec<SceneFile>,

    #[serde(default)]
    pub roots: SearchRoots,
}

impl ProjectFile {
    pub fn load(path: &Path) -> CliResult<Self> {
        let project_err = |message: String| CliError::Project {
            path: path.to_path_buf(),
            message,
        };

        let text = std::fs::read_to_string(path).map_err(|e| project_err(e.to_string()))?;
        let project: Self = serde_json::from_str(&text).map_err(|e| project_err(e.to_string()))?;

        tracing::info!(
            "Loaded project {:?}: {} scenes, {} assets",
            path,
            project.scenes.len(),
            project.roots.assets.len()
        );
        Ok(project)
    }

    /// Data root for this project, defaulting to the project file's directory.
    pub fn data_root(&self, project_path: &Path) -> PathBuf {
        match &self.data_root {
            Some(root) => root.clone(),
            None => project_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        }
    }

    /// Split into the scene loader and the asset roots.
    pub fn into_parts(self) -> (ProjectScenes, SearchRoots) {
        (ProjectScenes::new(self.scenes), self.roots)
    }
}
