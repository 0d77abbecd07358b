//! Action instances.

use serde::{Deserialize, Serialize};

use crate::action::{ActionCategory, ActionKind, ActionType};

/// A constructed action node inside an action list.
///
/// The catalog never owns instances. It reads the kind tag to find the
/// descriptor, and may write the descriptor's category and title back.
pub trait ActionInstance {
    /// Tag of the action type that built this instance.
    fn kind(&self) -> ActionKind;

    /// Category stored on the instance (may be stale).
    fn category(&self) -> ActionCategory;

    /// Title stored on the instance (may be stale).
    fn title(&self) -> &str;

    /// Copy category and title from a descriptor.
    fn assign_type(&mut self, action_type: &ActionType);
}

/// Plain, serializable action instance as stored in project files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Type tag. Legacy namespaced names are accepted and normalized.
    #[serde(deserialize_with = "deserialize_kind")]
    pub kind: ActionKind,

    pub category: ActionCategory,

    pub title: String,

    /// Type-specific parameters, opaque to the catalog.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: serde_json::Value,
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<ActionKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(ActionKind::parse(&raw))
}

impl ActionRecord {
    /// Build an instance from its descriptor.
    pub fn from_type(action_type: &ActionType) -> Self {
        Self {
            kind: action_type.kind(),
            category: action_type.category,
            title: action_type.title.clone(),
            data: serde_json::Value::Null,
        }
    }

    /// Build an instance with explicit (possibly stale) category and title.
    pub fn new(kind: impl Into<ActionKind>, category: ActionCategory, title: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            category,
            title: title.into(),
            data: serde_json::Value::Null,
        }
    }
}

impl ActionInstance for ActionRecord {
    fn kind(&self) -> ActionKind {
        self.kind.clone()
    }

    fn category(&self) -> ActionCategory {
        self.category
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn assign_type(&mut self, action_type: &ActionType) {
        self.kind = action_type.kind();
        self.category = action_type.category;
        self.title = action_type.title.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_type() {
        let ty = ActionType::new(ActionCategory::Dialogue, "Play speech", "ActionSpeech");
        let record = ActionRecord::from_type(&ty);
        assert_eq!(record.kind.as_str(), "ActionSpeech");
        assert_eq!(record.category, ActionCategory::Dialogue);
        assert_eq!(record.title(), "Play speech");
    }

    #[test]
    fn test_record_deserialize_legacy_kind() {
        let record: ActionRecord = serde_json::from_str(
            r#"{ "kind": "AC.ActionSpeech", "category": "Dialogue", "title": "Play speech" }"#,
        )
        .unwrap();
        assert_eq!(record.kind.as_str(), "ActionSpeech");
        assert!(record.data.is_null());
    }

    #[test]
    fn test_assign_type_overwrites_stale_fields() {
        let mut record = ActionRecord::new("ActionSpeech", ActionCategory::Custom, "old");
        let ty = ActionType::new(ActionCategory::Dialogue, "Play speech", "ActionSpeech");
        record.assign_type(&ty);
        assert_eq!(record.category, ActionCategory::Dialogue);
        assert_eq!(record.title, "Play speech");
    }
}
