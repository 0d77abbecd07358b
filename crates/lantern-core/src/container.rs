//! Action containers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::instance::ActionRecord;

/// Stable container identity.
///
/// Assets use their project path; scene objects use `scene#object`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(pub String);

impl ContainerId {
    /// Identity of an object inside a scene.
    pub fn scene_object(scene: &str, object: &str) -> Self {
        Self(format!("{}#{}", scene, object))
    }
}

impl From<String> for ContainerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContainerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ContainerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered sequence of action instances: a scene object or a persisted asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionList {
    /// Identity used to avoid scanning the same container twice.
    pub id: ContainerId,

    /// Display name (game object or asset name).
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub actions: Vec<ActionRecord>,
}

impl ActionList {
    /// Create a list whose display name equals its identity.
    pub fn new(id: impl Into<ContainerId>, actions: Vec<ActionRecord>) -> Self {
        let id = id.into();
        Self {
            name: id.0.clone(),
            id,
            actions,
        }
    }

    /// Builder-style display name setter.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
