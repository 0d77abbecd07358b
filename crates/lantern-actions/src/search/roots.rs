//! Root registries reachable by a global search.
//!
//! Subsystems refer to persisted action list assets by [`ContainerId`].
//! References are optional, and a reference may point at an asset that no
//! longer exists; both are skipped by the searcher.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use lantern_core::{ActionList, ContainerId};

/// Optional reference to a persisted action list asset.
pub type AssetRef = Option<ContainerId>;

// =============================================================================
// Asset Library
// =============================================================================

/// Persisted action list assets, by identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<ActionList>", into = "Vec<ActionList>")]
pub struct AssetLibrary {
    assets: HashMap<ContainerId, ActionList>,
}

impl AssetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an asset.
    pub fn insert(&mut self, list: ActionList) {
        self.assets.insert(list.id.clone(), list);
    }

    /// Resolve a reference. `None` for stale references.
    pub fn get(&self, id: &ContainerId) -> Option<&ActionList> {
        self.assets.get(id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl From<Vec<ActionList>> for AssetLibrary {
    fn from(lists: Vec<ActionList>) -> Self {
        let mut library = Self::new();
        for list in lists {
            library.insert(list);
        }
        library
    }
}

impl From<AssetLibrary> for Vec<ActionList> {
    fn from(library: AssetLibrary) -> Self {
        let mut lists: Vec<ActionList> = library.assets.into_values().collect();
        lists.sort_by(|a, b| a.id.cmp(&b.id));
        lists
    }
}

// =============================================================================
// Settings
// =============================================================================

/// An input that runs an action list when pressed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveInput {
    pub input_name: String,
    #[serde(default)]
    pub action_list: AssetRef,
}

/// Game settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsRoot {
    /// Runs when the game begins.
    pub action_list_on_start: AssetRef,
    pub active_inputs: Vec<ActiveInput>,
}

impl SettingsRoot {
    /// Asset references in search order.
    pub fn references(&self) -> Vec<(String, &AssetRef)> {
        let mut refs = vec![("settings: on start".to_string(), &self.action_list_on_start)];
        for input in &self.active_inputs {
            refs.push((format!("settings: input '{}'", input.input_name), &input.action_list));
        }
        refs
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// One inventory item and its interactions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItem {
    pub label: String,
    pub use_action_list: AssetRef,
    pub look_action_list: AssetRef,
    pub unhandled_action_list: AssetRef,
    pub unhandled_combine_action_list: AssetRef,
    /// One entry per item this item can be combined with.
    pub combine_action_lists: Vec<AssetRef>,
}

/// A crafting recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub label: String,
    pub action_list: AssetRef,
}

/// Inventory settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryRoot {
    pub unhandled_combine: AssetRef,
    pub unhandled_hotspot: AssetRef,
    pub unhandled_give: AssetRef,
    pub items: Vec<InventoryItem>,
    pub recipes: Vec<Recipe>,
}

impl InventoryRoot {
    /// Asset references in search order.
    pub fn references(&self) -> Vec<(String, &AssetRef)> {
        let mut refs = vec![
            ("inventory: unhandled combine".to_string(), &self.unhandled_combine),
            ("inventory: unhandled hotspot".to_string(), &self.unhandled_hotspot),
            ("inventory: unhandled give".to_string(), &self.unhandled_give),
        ];

        for item in &self.items {
            let origin = |what: &str| format!("item '{}': {}", item.label, what);
            refs.push((origin("use"), &item.use_action_list));
            refs.push((origin("look"), &item.look_action_list));
            refs.push((origin("unhandled"), &item.unhandled_action_list));
            refs.push((origin("unhandled combine"), &item.unhandled_combine_action_list));
            for combine in &item.combine_action_lists {
                refs.push((origin("combine"), combine));
            }
        }

        for recipe in &self.recipes {
            refs.push((format!("recipe '{}'", recipe.label), &recipe.action_list));
        }

        refs
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// Cursor settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorRoot {
    /// Fallback action lists, one per cursor interaction icon.
    pub unhandled_cursor_interactions: Vec<AssetRef>,
}

impl CursorRoot {
    /// Asset references in search order.
    pub fn references(&self) -> Vec<(String, &AssetRef)> {
        self.unhandled_cursor_interactions
            .iter()
            .enumerate()
            .map(|(i, r)| (format!("cursor: unhandled interaction {}", i), r))
            .collect()
    }
}

// =============================================================================
// Menus
// =============================================================================

/// What a menu button does when clicked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonClickType {
    TurnOffMenu,
    Crossfade,
    OffsetElementSlot,
    #[default]
    RunActionList,
    CustomScript,
    SimulateInput,
}

/// A menu element that may reference an action list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MenuElement {
    Button {
        title: String,
        #[serde(default)]
        click_type: ButtonClickType,
        #[serde(default)]
        action_list: AssetRef,
    },
    SavesList {
        title: String,
        #[serde(default)]
        action_list_on_save: AssetRef,
    },
    /// Any element that never runs action lists.
    Other { title: String },
}

impl MenuElement {
    /// The action list this element runs, if any.
    ///
    /// A button only counts when its click type runs an action list.
    pub fn reference(&self) -> Option<&AssetRef> {
        match self {
            MenuElement::Button {
                click_type: ButtonClickType::RunActionList,
                action_list,
                ..
            } => Some(action_list),
            MenuElement::Button { .. } => None,
            MenuElement::SavesList {
                action_list_on_save,
                ..
            } => Some(action_list_on_save),
            MenuElement::Other { .. } => None,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            MenuElement::Button { title, .. }
            | MenuElement::SavesList { title, .. }
            | MenuElement::Other { title } => title,
        }
    }
}

/// One menu.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Menu {
    pub title: String,
    pub action_list_on_turn_off: AssetRef,
    pub action_list_on_turn_on: AssetRef,
    pub elements: Vec<MenuElement>,
}

/// Menu settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuRoot {
    pub menus: Vec<Menu>,
}

impl MenuRoot {
    /// Asset references in search order.
    pub fn references(&self) -> Vec<(String, &AssetRef)> {
        let mut refs = Vec::new();
        for menu in &self.menus {
            refs.push((
                format!("menu '{}': turn off", menu.title),
                &menu.action_list_on_turn_off,
            ));
            refs.push((
                format!("menu '{}': turn on", menu.title),
                &menu.action_list_on_turn_on,
            ));
            for element in &menu.elements {
                if let Some(reference) = element.reference() {
                    refs.push((
                        format!("menu '{}': element '{}'", menu.title, element.title()),
                        reference,
                    ));
                }
            }
        }
        refs
    }
}

// =============================================================================
// Search Roots
// =============================================================================

/// Everything a global search walks besides scenes.
///
/// A missing subsystem contributes no containers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRoots {
    pub assets: AssetLibrary,
    pub settings: Option<SettingsRoot>,
    pub inventory: Option<InventoryRoot>,
    pub cursor: Option<CursorRoot>,
    pub menu: Option<MenuRoot>,
}

impl SearchRoots {
    /// Every asset reference, labelled with where it came from.
    ///
    /// Order: settings, inventory, cursor, menus.
    pub fn references(&self) -> Vec<(String, &AssetRef)> {
        let mut refs = Vec::new();
        if let Some(settings) = &self.settings {
            refs.extend(settings.references());
        }
        if let Some(inventory) = &self.inventory {
            refs.extend(inventory.references());
        }
        if let Some(cursor) = &self.cursor {
            refs.extend(cursor.references());
        }
        if let Some(menu) = &self.menu {
            refs.extend(menu.references());
        }
        refs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str) -> AssetRef {
        Some(ContainerId::from(id))
    }

    #[test]
    fn test_menu_button_reference_depends_on_click_type() {
        let run = MenuElement::Button {
            title: "Play".to_string(),
            click_type: ButtonClickType::RunActionList,
            action_list: asset("Assets/Play"),
        };
        let close = MenuElement::Button {
            title: "Close".to_string(),
            click_type: ButtonClickType::TurnOffMenu,
            action_list: asset("Assets/Close"),
        };
        let saves = MenuElement::SavesList {
            title: "Slots".to_string(),
            action_list_on_save: asset("Assets/OnSave"),
        };
        let label = MenuElement::Other {
            title: "Label".to_string(),
        };

        assert_eq!(run.reference(), Some(&asset("Assets/Play")));
        assert_eq!(close.reference(), None);
        assert_eq!(saves.reference(), Some(&asset("Assets/OnSave")));
        assert_eq!(label.reference(), None);
    }

    #[test]
    fn test_references_order() {
        let roots = SearchRoots {
            settings: Some(SettingsRoot {
                action_list_on_start: asset("Start"),
                active_inputs: vec![ActiveInput {
                    input_name: "Map".to_string(),
                    action_list: asset("Map"),
                }],
            }),
            inventory: Some(InventoryRoot {
                unhandled_give: asset("Give"),
                items: vec![InventoryItem {
                    label: "Key".to_string(),
                    use_action_list: asset("UseKey"),
                    combine_action_lists: vec![asset("KeyRope"), None],
                    ..Default::default()
                }],
                recipes: vec![Recipe {
                    label: "Grapple".to_string(),
                    action_list: asset("Grapple"),
                }],
                ..Default::default()
            }),
            cursor: Some(CursorRoot {
                unhandled_cursor_interactions: vec![asset("Look")],
            }),
            menu: None,
            ..Default::default()
        };

        let ids: Vec<Option<&str>> = roots
            .references()
            .into_iter()
            .map(|(_, r)| r.as_ref().map(|id| id.0.as_str()))
            .collect();

        assert_eq!(
            ids,
            vec![
                Some("Start"),
                Some("Map"),
                None,
                None,
                Some("Give"),
                Some("UseKey"),
                None,
                None,
                None,
                Some("KeyRope"),
                None,
                Some("Grapple"),
                Some("Look"),
            ]
        );
    }

    #[test]
    fn test_asset_library_from_json() {
        let library: AssetLibrary = serde_json::from_str(
            r#"[
                { "id": "Assets/Intro", "actions": [] },
                { "id": "Assets/Outro", "name": "Outro", "actions": [] }
            ]"#,
        )
        .unwrap();

        assert_eq!(library.len(), 2);
        assert_eq!(
            library.get(&ContainerId::from("Assets/Outro")).map(|l| l.name.as_str()),
            Some("Outro")
        );
        assert!(library.get(&ContainerId::from("Assets/Gone")).is_none());
    }
}
