//! Action type descriptors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Namespace prefix that older project files put in front of action file names.
pub const LEGACY_PREFIX: &str = "AC.";

/// Coarse grouping of action types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionCategory {
    ActionList,
    Camera,
    Character,
    Container,
    Dialogue,
    Engine,
    Hotspot,
    Input,
    Inventory,
    Menu,
    Moveable,
    Object,
    Player,
    Save,
    Scene,
    Sound,
    ThirdParty,
    Variable,
    Custom,
}

impl ActionCategory {
    /// Every category, in declaration order.
    pub const ALL: [ActionCategory; 19] = [
        ActionCategory::ActionList,
        ActionCategory::Camera,
        ActionCategory::Character,
        ActionCategory::Container,
        ActionCategory::Dialogue,
        ActionCategory::Engine,
        ActionCategory::Hotspot,
        ActionCategory::Input,
        ActionCategory::Inventory,
        ActionCategory::Menu,
        ActionCategory::Moveable,
        ActionCategory::Object,
        ActionCategory::Player,
        ActionCategory::Save,
        ActionCategory::Scene,
        ActionCategory::Sound,
        ActionCategory::ThirdParty,
        ActionCategory::Variable,
        ActionCategory::Custom,
    ];

    /// The sentinel category returned when a lookup has nothing to report.
    pub const fn first() -> Self {
        ActionCategory::ActionList
    }

    /// Variant name, as written in manifests and scripts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActionList => "ActionList",
            Self::Camera => "Camera",
            Self::Character => "Character",
            Self::Container => "Container",
            Self::Dialogue => "Dialogue",
            Self::Engine => "Engine",
            Self::Hotspot => "Hotspot",
            Self::Input => "Input",
            Self::Inventory => "Inventory",
            Self::Menu => "Menu",
            Self::Moveable => "Moveable",
            Self::Object => "Object",
            Self::Player => "Player",
            Self::Save => "Save",
            Self::Scene => "Scene",
            Self::Sound => "Sound",
            Self::ThirdParty => "ThirdParty",
            Self::Variable => "Variable",
            Self::Custom => "Custom",
        }
    }
}

impl Default for ActionCategory {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionCategory {
    type Err = String;

    /// Case-insensitive parse of a category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown action category '{}'", s))
    }
}

/// Explicit type tag carried by every action instance.
///
/// The tag is the file name of the action type that built the instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionKind(String);

impl ActionKind {
    /// Create a tag from a canonical file name.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self(file_name.into())
    }

    /// Create a tag from a possibly namespaced name, stripping [`LEGACY_PREFIX`].
    pub fn parse(raw: &str) -> Self {
        let name = raw.strip_prefix(LEGACY_PREFIX).unwrap_or(raw);
        Self(name.to_string())
    }

    /// The canonical file name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActionKind {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for ActionKind {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl AsRef<str> for ActionKind {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn default_enabled() -> bool {
    true
}

/// Identity record for one kind of action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionType {
    /// Category the action is listed under.
    pub category: ActionCategory,

    /// Short display name, unique within its category.
    pub title: String,

    /// Canonical identifier, unique across all action types.
    pub file_name: String,

    /// Free-form description shown in the editor.
    #[serde(default)]
    pub description: String,

    /// Whether the type is offered to action list editors.
    #[serde(default = "default_enabled", alias = "enabled")]
    pub is_enabled: bool,
}

impl ActionType {
    /// Create an enabled action type with an empty description.
    pub fn new(
        category: ActionCategory,
        title: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            file_name: file_name.into(),
            description: String::new(),
            is_enabled: true,
        }
    }

    /// Builder-style description setter.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder-style enablement setter.
    pub fn enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    /// Label shown in menus, e.g. "Dialogue: Play speech".
    pub fn full_title(&self) -> String {
        format!("{}: {}", self.category, self.title)
    }

    /// The tag instances of this type carry.
    pub fn kind(&self) -> ActionKind {
        ActionKind::new(self.file_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str_case_insensitive() {
        assert_eq!("dialogue".parse::<ActionCategory>(), Ok(ActionCategory::Dialogue));
        assert_eq!(" ThirdParty ".parse::<ActionCategory>(), Ok(ActionCategory::ThirdParty));
        assert!("Nope".parse::<ActionCategory>().is_err());
    }

    #[test]
    fn test_category_first_is_declaration_head() {
        assert_eq!(ActionCategory::first(), ActionCategory::ALL[0]);
        assert_eq!(ActionCategory::default(), ActionCategory::ActionList);
    }

    #[test]
    fn test_kind_strips_legacy_prefix() {
        assert_eq!(ActionKind::parse("AC.ActionSpeech").as_str(), "ActionSpeech");
        assert_eq!(ActionKind::parse("ActionSpeech").as_str(), "ActionSpeech");
        // Only a leading prefix is stripped
        assert_eq!(ActionKind::parse("MyAC.Thing").as_str(), "MyAC.Thing");
    }

    #[test]
    fn test_full_title() {
        let ty = ActionType::new(ActionCategory::Camera, "Shake", "ActionCameraShake");
        assert_eq!(ty.full_title(), "Camera: Shake");
        assert_eq!(ty.kind(), ActionKind::new("ActionCameraShake"));
    }

    #[test]
    fn test_descriptor_deserialize_defaults() {
        let ty: ActionType = serde_json::from_str(
            r#"{ "category": "Sound", "title": "Play", "file_name": "ActionSound" }"#,
        )
        .unwrap();
        assert!(ty.is_enabled);
        assert!(ty.description.is_empty());
    }
}
