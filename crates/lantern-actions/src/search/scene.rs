//! Scene access for global searches.

use serde::{Deserialize, Serialize};

use lantern_core::{ActionList, SceneError};

/// Opens scenes and lists the action lists inside the open scene.
///
/// Opening a scene is stateful and may be slow; the searcher opens each
/// scene at most once per search, in `scene_files()` order.
#[cfg_attr(test, mockall::automock)]
pub trait SceneLoader {
    /// Every scene in the project, in build order.
    fn scene_files(&self) -> Vec<String>;

    /// The scene that is currently open, if any.
    fn current_scene(&self) -> Option<String>;

    /// Make `path` the open scene.
    fn open_scene(&mut self, path: &str) -> Result<(), SceneError>;

    /// Action lists in the open scene.
    fn scene_containers(&self) -> Vec<ActionList>;
}

/// A scene stored in a project file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneFile {
    pub path: String,
    /// Scene objects that hold action lists.
    #[serde(default)]
    pub action_lists: Vec<ActionList>,
}

/// Scenes held in memory, e.g. loaded from a project file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectScenes {
    #[serde(default)]
    pub scenes: Vec<SceneFile>,
    #[serde(skip)]
    open: Option<usize>,
}

impl ProjectScenes {
    pub fn new(scenes: Vec<SceneFile>) -> Self {
        Self { scenes, open: None }
    }

    /// The open scene, if it is still in `scenes`.
    fn open_file(&self) -> Option<&SceneFile> {
        self.open.and_then(|i| self.scenes.get(i))
    }
}

impl SceneLoader for ProjectScenes {
    fn scene_files(&self) -> Vec<String> {
        self.scenes.iter().map(|s| s.path.clone()).collect()
    }

    fn current_scene(&self) -> Option<String> {
        self.open_file().map(|s| s.path.clone())
    }

    fn open_scene(&mut self, path: &str) -> Result<(), SceneError> {
        let index = self
            .scenes
            .iter()
            .position(|s| s.path == path)
            .ok_or_else(|| SceneError::NotFound(path.to_string()))?;
        self.open = Some(index);
        tracing::debug!("Opened scene {}", path);
        Ok(())
    }

    fn scene_containers(&self) -> Vec<ActionList> {
        self.open_file()
            .map(|s| s.action_lists.clone())
            .unwrap_or_default()
    }
}
