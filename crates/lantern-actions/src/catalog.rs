//! Action Type Catalog
//!
//! Owns every discovered action type and the enabled subset offered to
//! action list editors, and resolves between file names, enabled-set
//! indices, category slots and live instances.
//!
//! ## Indices
//!
//! All indices are positions in the *enabled* set, which is an
//! order-preserving filter of discovery order:
//!
//! ```text
//! all:      [Speech, Shake(off), Stop, Fade]
//! enabled:  [Speech, Stop, Fade]          index 0..3
//! Dialogue: [Speech, Stop]                slot 0..2
//! ```
//!
//! ## Publishing
//!
//! Every mutation recomputes the enabled set under the write lock and then
//! broadcasts a [`CatalogSnapshot`]. Readers never observe a half-built set.

use parking_lot::RwLock;
use tokio::sync::watch;

use lantern_core::{ActionCategory, ActionInstance, ActionType, ActionsSettings, LEGACY_PREFIX};

use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Snapshot
// =============================================================================

/// The enabled set and default selection, as published to subscribers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    /// Enabled action types, in discovery order.
    pub enabled: Vec<ActionType>,

    /// Index of the default action type in `enabled`.
    pub default_index: usize,
}

impl CatalogSnapshot {
    /// The default action type, if the enabled set is non-empty.
    pub fn default_type(&self) -> Option<&ActionType> {
        self.enabled.get(self.default_index)
    }
}

// =============================================================================
// State
// =============================================================================

#[derive(Debug, Default)]
struct CatalogState {
    /// Every known action type, in discovery order.
    all: Vec<ActionType>,

    /// Positions in `all` of the enabled types.
    enabled: Vec<usize>,

    /// Index into `enabled`.
    default_index: usize,
}

impl CatalogState {
    /// Rebuild the enabled set from scratch and clamp the default index.
    fn recompute(&mut self) {
        self.enabled = self
            .all
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_enabled)
            .map(|(i, _)| i)
            .collect();

        if self.default_index >= self.enabled.len() {
            self.default_index = self.enabled.len().saturating_sub(1);
        }
    }

    fn enabled_iter(&self) -> impl Iterator<Item = &ActionType> + '_ {
        self.enabled.iter().map(move |&i| &self.all[i])
    }

    fn enabled_at(&self, index: usize) -> Option<&ActionType> {
        self.enabled.get(index).map(|&i| &self.all[i])
    }

    fn enabled_position(&self, file_name: &str) -> Option<usize> {
        self.enabled_iter().position(|t| t.file_name == file_name)
    }

    fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            enabled: self.enabled_iter().cloned().collect(),
            default_index: self.default_index,
        }
    }

    fn check_unique(&self, action_type: &ActionType) -> CatalogResult<()> {
        check_unique(&self.all, action_type)
    }
}

fn check_unique(existing: &[ActionType], action_type: &ActionType) -> CatalogResult<()> {
    for other in existing {
        if other.file_name == action_type.file_name {
            return Err(CatalogError::DuplicateFileName(action_type.file_name.clone()));
        }
        if other.category == action_type.category && other.title == action_type.title {
            return Err(CatalogError::DuplicateTitle {
                category: action_type.category,
                title: action_type.title.clone(),
            });
        }
    }
    Ok(())
}

/// Strip the legacy namespace from an instance's kind tag.
fn instance_file_name(instance: &dyn ActionInstance) -> String {
    let kind = instance.kind();
    let name = kind.as_str();
    name.strip_prefix(LEGACY_PREFIX).unwrap_or(name).to_string()
}

// =============================================================================
// ActionCatalog
// =============================================================================

/// Registry of known and enabled action types.
pub struct ActionCatalog {
    inner: RwLock<CatalogState>,
    tx: watch::Sender<CatalogSnapshot>,
    rx: watch::Receiver<CatalogSnapshot>,
}

impl ActionCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(CatalogSnapshot::default());
        Self {
            inner: RwLock::new(CatalogState::default()),
            tx,
            rx,
        }
    }

    /// Create a catalog from a discovery result and compute its enabled set.
    pub fn from_types(types: Vec<ActionType>) -> CatalogResult<Self> {
        let catalog = Self::new();
        for action_type in types {
            catalog.register(action_type)?;
        }
        catalog.set_enabled();
        Ok(catalog)
    }

    /// Subscribe to enabled-set changes.
    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.rx.clone()
    }

    fn publish(&self, snapshot: CatalogSnapshot) {
        let _ = self.tx.send(snapshot);
    }

    /// Run a mutation, recompute, and broadcast the new snapshot.
    fn mutate<R>(&self, f: impl FnOnce(&mut CatalogState) -> CatalogResult<R>) -> CatalogResult<R> {
        let (result, snapshot) = {
            let mut inner = self.inner.write();
            let result = f(&mut inner)?;
            inner.recompute();
            (result, inner.snapshot())
        };
        self.publish(snapshot);
        Ok(result)
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Append a discovered action type.
    ///
    /// The enabled set is not recomputed; call [`set_enabled`](Self::set_enabled)
    /// once discovery is finished.
    pub fn register(&self, action_type: ActionType) -> CatalogResult<()> {
        let mut inner = self.inner.write();
        inner.check_unique(&action_type)?;
        tracing::debug!("Registered action type: {}", action_type.full_title());
        inner.all.push(action_type);
        Ok(())
    }

    /// Replace all action types with a new discovery result.
    ///
    /// The default action type is kept if it was rediscovered and is enabled.
    pub fn refresh(&self, types: Vec<ActionType>) -> CatalogResult<()> {
        let mut validated: Vec<ActionType> = Vec::with_capacity(types.len());
        for action_type in types {
            check_unique(&validated, &action_type)?;
            validated.push(action_type);
        }

        self.mutate(|state| {
            let previous_default = state.enabled_at(state.default_index).map(|t| t.file_name.clone());
            state.all = validated;
            state.recompute();
            if let Some(pos) = previous_default.and_then(|name| state.enabled_position(&name)) {
                state.default_index = pos;
            }
            tracing::info!(
                "Refreshed action catalog: {} types, {} enabled",
                state.all.len(),
                state.enabled.len()
            );
            Ok(())
        })
    }

    // =========================================================================
    // Enablement
    // =========================================================================

    /// Recompute the enabled set from each type's `is_enabled` flag.
    ///
    /// Clamps the default index if the enabled set shrank.
    pub fn set_enabled(&self) {
        // The closure never fails
        let _ = self.mutate(|_| Ok(()));
    }

    /// Enable or disable one action type by file name.
    pub fn set_type_enabled(&self, file_name: &str, enabled: bool) -> CatalogResult<()> {
        self.mutate(|state| {
            let action_type = state
                .all
                .iter_mut()
                .find(|t| t.file_name == file_name)
                .ok_or_else(|| CatalogError::UnknownType(file_name.to_string()))?;
            action_type.is_enabled = enabled;
            tracing::debug!("Set '{}' enabled = {}", file_name, enabled);
            Ok(())
        })
    }

    /// Make an enabled action type the default.
    pub fn set_default(&self, file_name: &str) -> CatalogResult<()> {
        self.mutate(|state| {
            if let Some(pos) = state.enabled_position(file_name) {
                state.default_index = pos;
                return Ok(());
            }
            if state.all.iter().any(|t| t.file_name == file_name) {
                Err(CatalogError::NotEnabled(file_name.to_string()))
            } else {
                Err(CatalogError::UnknownType(file_name.to_string()))
            }
        })
    }

    /// Make the action type at an enabled-set index the default.
    pub fn set_default_index(&self, index: usize) -> CatalogResult<()> {
        self.mutate(|state| {
            let len = state.enabled.len();
            if index >= len {
                return Err(CatalogError::IndexOutOfRange { index, len });
            }
            state.default_index = index;
            Ok(())
        })
    }

    /// Apply stored user preferences: disabled types and the default type.
    ///
    /// Types not listed as disabled are enabled. An unusable default is
    /// logged and ignored.
    pub fn apply_settings(&self, settings: &ActionsSettings) {
        let _ = self.mutate(|state| {
            for action_type in state.all.iter_mut() {
                action_type.is_enabled = !settings.disabled.contains(&action_type.file_name);
            }
            Ok(())
        });

        if let Some(default) = &settings.default_action {
            if let Err(e) = self.set_default(default) {
                tracing::warn!("Ignoring default action '{}': {}", default, e);
            }
        }
    }

    /// Record the current enablement and default into settings.
    pub fn store_settings(&self, settings: &mut ActionsSettings) {
        let inner = self.inner.read();
        settings.disabled = inner
            .all
            .iter()
            .filter(|t| !t.is_enabled)
            .map(|t| t.file_name.clone())
            .collect();
        settings.default_action = inner
            .enabled_at(inner.default_index)
            .map(|t| t.file_name.clone());
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Index of the default action type in the enabled set.
    pub fn default_index(&self) -> usize {
        self.inner.read().default_index
    }

    /// File name of the default action type, or `None` if nothing is enabled.
    pub fn default_file_name(&self) -> Option<String> {
        let inner = self.inner.read();
        inner
            .enabled_at(inner.default_index)
            .map(|t| t.file_name.clone())
    }

    /// File name of the enabled action type at `index`.
    pub fn file_name_at(&self, index: usize) -> CatalogResult<String> {
        let inner = self.inner.read();
        inner
            .enabled_at(index)
            .map(|t| t.file_name.clone())
            .ok_or(CatalogError::IndexOutOfRange {
                index,
                len: inner.enabled.len(),
            })
    }

    /// Number of enabled action types.
    pub fn enabled_count(&self) -> usize {
        self.inner.read().enabled.len()
    }

    /// Number of known action types.
    pub fn all_count(&self) -> usize {
        self.inner.read().all.len()
    }

    /// Check whether an enabled action type has this file name.
    ///
    /// Names carrying the legacy `AC.` namespace are accepted too.
    pub fn exists(&self, name: &str) -> bool {
        let stripped = name.strip_prefix(LEGACY_PREFIX);
        self.inner
            .read()
            .enabled_iter()
            .any(|t| t.file_name == name || stripped == Some(t.file_name.as_str()))
    }

    /// Enabled-set index of an instance's action type.
    pub fn find_instance_index(&self, instance: &dyn ActionInstance) -> Option<usize> {
        let file_name = instance_file_name(instance);
        self.inner.read().enabled_position(&file_name)
    }

    /// Enabled-set index of an instance's action type, or the default index.
    pub fn index_of_instance(&self, instance: &dyn ActionInstance) -> usize {
        self.find_instance_index(instance)
            .unwrap_or_else(|| self.default_index())
    }

    /// Enabled-set index of the `sub_index`-th enabled type in `category`.
    pub fn find_category_slot(&self, category: ActionCategory, sub_index: usize) -> Option<usize> {
        let inner = self.inner.read();
        let slot = inner
            .enabled_iter()
            .enumerate()
            .filter(|(_, t)| t.category == category)
            .nth(sub_index)
            .map(|(i, _)| i);
        slot
    }

    /// Like [`find_category_slot`](Self::find_category_slot), falling back to `0`.
    pub fn index_of_category_slot(&self, category: ActionCategory, sub_index: usize) -> usize {
        self.find_category_slot(category, sub_index).unwrap_or(0)
    }

    /// Titles of all enabled action types.
    pub fn titles(&self) -> Vec<String> {
        self.inner
            .read()
            .enabled_iter()
            .map(|t| t.title.clone())
            .collect()
    }

    /// Titles of the enabled action types in one category.
    pub fn titles_in(&self, category: ActionCategory) -> Vec<String> {
        self.inner
            .read()
            .enabled_iter()
            .filter(|t| t.category == category)
            .map(|t| t.title.clone())
            .collect()
    }

    /// Category of the enabled type at `index`.
    pub fn find_category_at(&self, index: usize) -> Option<ActionCategory> {
        self.inner.read().enabled_at(index).map(|t| t.category)
    }

    /// Category of the enabled type at `index`.
    ///
    /// Out of range falls back to the first enabled type's category, or
    /// [`ActionCategory::first`] when nothing is enabled.
    pub fn category_at(&self, index: usize) -> ActionCategory {
        let inner = self.inner.read();
        let category = inner
            .enabled_at(index)
            .or_else(|| inner.enabled_at(0))
            .map(|t| t.category);
        category.unwrap_or_else(ActionCategory::first)
    }

    /// Position of an instance's type among enabled types of the same category.
    ///
    /// The category comes from the catalog, not the instance, since the
    /// instance may carry a stale one.
    pub fn find_sub_category_slot(&self, instance: &dyn ActionInstance) -> Option<usize> {
        let file_name = instance_file_name(instance);
        let inner = self.inner.read();
        let category = inner
            .enabled_iter()
            .find(|t| t.file_name == file_name)?
            .category;
        let slot = inner
            .enabled_iter()
            .filter(|t| t.category == category)
            .position(|t| t.file_name == file_name);
        slot
    }

    /// Like [`find_sub_category_slot`](Self::find_sub_category_slot), falling back to `0`.
    pub fn sub_category_slot(&self, instance: &dyn ActionInstance) -> usize {
        self.find_sub_category_slot(instance).unwrap_or_else(|| {
            tracing::warn!(
                "Error building action '{}' ({}: {})",
                instance.kind(),
                instance.category(),
                instance.title()
            );
            0
        })
    }

    /// Copy the category and title of the enabled type at `index` into an instance.
    pub fn assign_type(&self, instance: &mut dyn ActionInstance, index: usize) -> CatalogResult<()> {
        let inner = self.inner.read();
        let action_type = inner.enabled_at(index).ok_or(CatalogError::IndexOutOfRange {
            index,
            len: inner.enabled.len(),
        })?;
        instance.assign_type(action_type);
        Ok(())
    }

    /// Look up any known action type by file name.
    pub fn get(&self, file_name: &str) -> Option<ActionType> {
        self.inner
            .read()
            .all
            .iter()
            .find(|t| t.file_name == file_name)
            .cloned()
    }

    /// Enabled-set index of a file name.
    pub fn enabled_index_of(&self, file_name: &str) -> Option<usize> {
        self.inner.read().enabled_position(file_name)
    }

    /// Snapshot of the enabled action types.
    pub fn enabled_types(&self) -> Vec<ActionType> {
        self.inner.read().enabled_iter().cloned().collect()
    }

    /// Snapshot of every known action type.
    pub fn all_types(&self) -> Vec<ActionType> {
        self.inner.read().all.clone()
    }

    /// Current enabled set and default, without subscribing.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.inner.read().snapshot()
    }
}

impl Default for ActionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_core::ActionRecord;

    fn play() -> ActionType {
        ActionType::new(ActionCategory::Dialogue, "Play", "ActionSpeech")
    }

    fn stop() -> ActionType {
        ActionType::new(ActionCategory::Dialogue, "Stop", "ActionSpeechStop")
    }

    fn shake() -> ActionType {
        ActionType::new(ActionCategory::Camera, "Shake", "ActionCameraShake")
    }

    fn fade() -> ActionType {
        ActionType::new(ActionCategory::Camera, "Fade", "ActionFade")
    }

    fn scenario_catalog() -> ActionCatalog {
        ActionCatalog::from_types(vec![play(), stop(), shake()]).unwrap()
    }

    #[test]
    fn test_enabled_is_ordered_subsequence() {
        let catalog = ActionCatalog::from_types(vec![
            play(),
            shake().enabled(false),
            stop(),
            fade(),
        ])
        .unwrap();

        let enabled: Vec<String> = catalog
            .enabled_types()
            .into_iter()
            .map(|t| t.file_name)
            .collect();
        assert_eq!(enabled, vec!["ActionSpeech", "ActionSpeechStop", "ActionFade"]);
        assert_eq!(catalog.all_count(), 4);
        assert_eq!(catalog.enabled_count(), 3);
    }

    #[test]
    fn test_default_index_clamped_when_enabled_set_shrinks() {
        let catalog = scenario_catalog();
        catalog.set_default_index(2).unwrap();

        catalog.set_type_enabled("ActionCameraShake", false).unwrap();
        assert_eq!(catalog.default_index(), 1);

        catalog.set_type_enabled("ActionSpeechStop", false).unwrap();
        catalog.set_type_enabled("ActionSpeech", false).unwrap();
        assert_eq!(catalog.enabled_count(), 0);
        assert_eq!(catalog.default_index(), 0);
    }

    #[test]
    fn test_disabling_only_type_leaves_no_default() {
        let catalog = ActionCatalog::from_types(vec![play()]).unwrap();
        assert_eq!(catalog.default_file_name(), Some("ActionSpeech".to_string()));

        catalog.set_type_enabled("ActionSpeech", false).unwrap();
        catalog.set_enabled();
        assert_eq!(catalog.default_file_name(), None);
        assert!(catalog.snapshot().default_type().is_none());
    }

    #[test]
    fn test_empty_catalog_lookups() {
        let catalog = ActionCatalog::new();
        catalog.set_enabled();
        assert_eq!(catalog.default_file_name(), None);
        assert_eq!(catalog.category_at(0), ActionCategory::first());
        assert!(catalog.titles().is_empty());
        assert!(!catalog.exists("ActionSpeech"));
        assert!(matches!(
            catalog.file_name_at(0),
            Err(CatalogError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_scenario_titles_and_slots() {
        let catalog = scenario_catalog();
        assert_eq!(catalog.default_index(), 0);
        assert_eq!(catalog.titles_in(ActionCategory::Dialogue), vec!["Play", "Stop"]);
        assert_eq!(catalog.titles(), vec!["Play", "Stop", "Shake"]);
        assert_eq!(catalog.index_of_category_slot(ActionCategory::Dialogue, 1), 1);
        assert_eq!(catalog.index_of_category_slot(ActionCategory::Camera, 0), 2);
        assert_eq!(catalog.category_at(5), ActionCategory::Dialogue);
        assert_eq!(catalog.find_category_at(5), None);
        assert_eq!(catalog.category_at(2), ActionCategory::Camera);
    }

    #[test]
    fn test_category_slot_fallback() {
        let catalog = scenario_catalog();
        assert_eq!(catalog.find_category_slot(ActionCategory::Camera, 1), None);
        assert_eq!(catalog.index_of_category_slot(ActionCategory::Camera, 1), 0);
        assert_eq!(catalog.index_of_category_slot(ActionCategory::Sound, 0), 0);
    }

    #[test]
    fn test_find_slots_hold_read_lock_only_while_scanning() {
        let catalog = scenario_catalog();
        assert_eq!(catalog.find_category_slot(ActionCategory::Dialogue, 1), Some(1));
        assert_eq!(catalog.find_category_slot(ActionCategory::Camera, 0), Some(2));

        let instance = ActionRecord::from_type(&shake());
        assert_eq!(catalog.find_sub_category_slot(&instance), Some(0));

        // The guard is released, so a mutation right after does not deadlock
        catalog.set_type_enabled("ActionSpeech", false).unwrap();
        assert_eq!(catalog.find_category_slot(ActionCategory::Camera, 0), Some(1));
    }

    #[test]
    fn test_category_slot_round_trips_through_instances() {
        let catalog = ActionCatalog::from_types(vec![
            play(),
            shake(),
            stop(),
            fade(),
            ActionType::new(ActionCategory::Dialogue, "Hide", "ActionSpeechHide"),
        ])
        .unwrap();

        for category in [ActionCategory::Dialogue, ActionCategory::Camera] {
            let count = catalog.titles_in(category).len();
            for k in 0..count {
                let index = catalog.index_of_category_slot(category, k);
                let file_name = catalog.file_name_at(index).unwrap();
                let instance = ActionRecord::from_type(&catalog.get(&file_name).unwrap());
                assert_eq!(catalog.sub_category_slot(&instance), k);
            }
        }
    }

    #[test]
    fn test_sub_category_slot_ignores_stale_instance_category() {
        let catalog = scenario_catalog();
        let instance = ActionRecord::new("ActionSpeechStop", ActionCategory::Camera, "Stop");
        assert_eq!(catalog.find_sub_category_slot(&instance), Some(1));
    }

    #[test]
    fn test_sub_category_slot_unknown_instance() {
        let catalog = scenario_catalog();
        let instance = ActionRecord::new("ActionMissing", ActionCategory::Dialogue, "Missing");
        assert_eq!(catalog.find_sub_category_slot(&instance), None);
        assert_eq!(catalog.sub_category_slot(&instance), 0);
    }

    #[test]
    fn test_exists_accepts_legacy_prefix() {
        let catalog = scenario_catalog();
        assert!(catalog.exists("ActionSpeech"));
        assert!(catalog.exists("AC.ActionSpeech"));
        assert!(!catalog.exists("AC.AC.ActionSpeech"));
        assert!(!catalog.exists("ActionSpeec"));

        catalog.set_type_enabled("ActionSpeech", false).unwrap();
        assert!(!catalog.exists("ActionSpeech"));
        assert!(!catalog.exists("AC.ActionSpeech"));
    }

    #[test]
    fn test_index_of_instance() {
        let catalog = scenario_catalog();
        catalog.set_default_index(1).unwrap();

        let shake_instance = ActionRecord::from_type(&shake());
        assert_eq!(catalog.index_of_instance(&shake_instance), 2);

        // Legacy namespaced tags resolve too
        let legacy = ActionRecord {
            kind: lantern_core::ActionKind::new("AC.ActionCameraShake"),
            ..shake_instance.clone()
        };
        assert_eq!(catalog.find_instance_index(&legacy), Some(2));

        // Unknown falls back to the default
        let unknown = ActionRecord::new("ActionMissing", ActionCategory::Sound, "Missing");
        assert_eq!(catalog.find_instance_index(&unknown), None);
        assert_eq!(catalog.index_of_instance(&unknown), 1);
    }

    #[test]
    fn test_file_name_at_bounds() {
        let catalog = scenario_catalog();
        assert_eq!(catalog.file_name_at(1).unwrap(), "ActionSpeechStop");
        assert_eq!(
            catalog.file_name_at(3),
            Err(CatalogError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let catalog = scenario_catalog();

        let same_file = ActionType::new(ActionCategory::Sound, "Other", "ActionSpeech");
        assert_eq!(
            catalog.register(same_file),
            Err(CatalogError::DuplicateFileName("ActionSpeech".to_string()))
        );

        let same_title = ActionType::new(ActionCategory::Dialogue, "Play", "ActionOther");
        assert!(matches!(
            catalog.register(same_title),
            Err(CatalogError::DuplicateTitle { .. })
        ));

        // Same title in another category is fine
        let other_category = ActionType::new(ActionCategory::Sound, "Play", "ActionSound");
        assert!(catalog.register(other_category).is_ok());
        assert_eq!(catalog.all_count(), 4);
    }

    #[test]
    fn test_set_default() {
        let catalog = scenario_catalog();
        catalog.set_default("ActionCameraShake").unwrap();
        assert_eq!(catalog.default_index(), 2);
        assert_eq!(
            catalog.default_file_name(),
            Some("ActionCameraShake".to_string())
        );

        catalog.set_type_enabled("ActionSpeechStop", false).unwrap();
        assert_eq!(
            catalog.set_default("ActionSpeechStop"),
            Err(CatalogError::NotEnabled("ActionSpeechStop".to_string()))
        );
        assert_eq!(
            catalog.set_default("ActionNope"),
            Err(CatalogError::UnknownType("ActionNope".to_string()))
        );
        assert!(catalog.set_default_index(5).is_err());
    }

    #[test]
    fn test_set_type_enabled_unknown() {
        let catalog = scenario_catalog();
        assert_eq!(
            catalog.set_type_enabled("ActionNope", false),
            Err(CatalogError::UnknownType("ActionNope".to_string()))
        );
    }

    #[test]
    fn test_refresh_keeps_default_by_file_name() {
        let catalog = scenario_catalog();
        catalog.set_default("ActionSpeechStop").unwrap();

        catalog.refresh(vec![fade(), shake(), stop()]).unwrap();
        assert_eq!(catalog.default_index(), 2);
        assert_eq!(
            catalog.default_file_name(),
            Some("ActionSpeechStop".to_string())
        );
    }

    #[test]
    fn test_refresh_rejects_duplicates_without_changes() {
        let catalog = scenario_catalog();
        let result = catalog.refresh(vec![fade(), fade()]);
        assert!(matches!(result, Err(CatalogError::DuplicateFileName(_))));
        assert_eq!(catalog.all_count(), 3);
    }

    #[test]
    fn test_assign_type() {
        let catalog = scenario_catalog();
        let mut instance = ActionRecord::from_type(&play());
        catalog.assign_type(&mut instance, 2).unwrap();
        assert_eq!(instance.category, ActionCategory::Camera);
        assert_eq!(instance.title, "Shake");
        assert!(catalog.assign_type(&mut instance, 3).is_err());
    }

    #[test]
    fn test_subscribers_see_recomputed_set() {
        let catalog = scenario_catalog();
        let rx = catalog.subscribe();
        assert_eq!(rx.borrow().enabled.len(), 3);

        catalog.set_type_enabled("ActionSpeech", false).unwrap();
        assert_eq!(rx.borrow().enabled.len(), 2);
        assert_eq!(rx.borrow().enabled[0].file_name, "ActionSpeechStop");

        catalog.set_default_index(1).unwrap();
        assert_eq!(rx.borrow().default_index, 1);
        assert_eq!(*rx.borrow(), catalog.snapshot());
    }

    #[test]
    fn test_settings_round_trip() {
        let catalog = scenario_catalog();
        catalog.set_type_enabled("ActionSpeechStop", false).unwrap();
        catalog.set_default("ActionCameraShake").unwrap();

        let mut settings = ActionsSettings::default();
        catalog.store_settings(&mut settings);
        assert_eq!(settings.disabled, vec!["ActionSpeechStop".to_string()]);
        assert_eq!(settings.default_action, Some("ActionCameraShake".to_string()));

        let fresh = scenario_catalog();
        fresh.apply_settings(&settings);
        assert_eq!(fresh.enabled_count(), 2);
        assert_eq!(fresh.default_file_name(), Some("ActionCameraShake".to_string()));
    }

    #[test]
    fn test_apply_settings_ignores_unknown_default() {
        let catalog = scenario_catalog();
        let settings = ActionsSettings {
            default_action: Some("ActionGone".to_string()),
            ..Default::default()
        };
        catalog.apply_settings(&settings);
        assert_eq!(catalog.default_index(), 0);
        assert_eq!(catalog.enabled_count(), 3);
    }
}
