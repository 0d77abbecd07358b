//! Action Instance Search
//!
//! Counts the instances of one action type across every action list the
//! project can run, reporting a hit for each list that contains any.
//!
//! ## Global Search Order
//!
//! ```text
//! scene files (each opened once, loader order)
//!      │  every action list in the scene
//!      ▼
//! settings ──► inventory ──► cursor ──► menus
//!      │  referenced assets, each scanned once
//!      ▼
//! SearchReport
//! ```
//!
//! Assets are shared between subsystems (one "unhandled" list may back many
//! items), so a visited set keyed by [`ContainerId`] guarantees each asset is
//! counted once per search. Scene objects are tracked per scene: two scenes
//! may both hold an object with the same id, and neither hides an asset.
//! Absent and stale references are skipped.

mod roots;
mod scene;

pub use roots::{
    ActiveInput, AssetLibrary, AssetRef, ButtonClickType, CursorRoot, InventoryItem,
    InventoryRoot, Menu, MenuElement, MenuRoot, Recipe, SearchRoots, SettingsRoot,
};
pub use scene::{ProjectScenes, SceneFile, SceneLoader};

use std::collections::HashSet;

use serde::Serialize;

use lantern_core::{ActionInstance, ActionList, ActionType, ContainerId};

// =============================================================================
// Matching
// =============================================================================

/// How an instance's title is compared against the target's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Same category, and the instance title contains the target title.
    ///
    /// "Play" matches "Play speech" and "Play music" alike.
    #[default]
    Permissive,

    /// Same category and identical title.
    Exact,
}

impl MatchMode {
    /// Check one instance against the target type.
    pub fn matches(&self, instance: &dyn ActionInstance, target: &ActionType) -> bool {
        if instance.category() != target.category {
            return false;
        }
        let title = instance.title();
        match self {
            MatchMode::Exact => title == target.title,
            MatchMode::Permissive => title == target.title || title.contains(target.title.as_str()),
        }
    }
}

// =============================================================================
// Scope & Report
// =============================================================================

/// Where to search.
pub enum SearchScope<'a> {
    /// Action lists of the open scene only. Nothing is loaded.
    Local(&'a [ActionList]),

    /// Every scene, then every subsystem's referenced assets.
    Global {
        roots: &'a SearchRoots,
        scenes: &'a mut dyn SceneLoader,
    },
}

/// One action list that contains the target type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub container: ContainerId,

    /// Display name of the action list.
    pub name: String,

    /// Scene the list lives in, for scene objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,

    /// Where the list was reached from, for assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Matching instances in the list.
    pub count: usize,
}

/// Result of one search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Full title of the target type.
    pub target: String,

    /// Lists with at least one match, in visit order.
    pub hits: Vec<SearchHit>,

    /// Distinct action lists scanned.
    pub containers_scanned: usize,

    /// Scenes opened (or already open) during the search.
    pub scenes_visited: usize,
}

impl SearchReport {
    /// Total matching instances.
    pub fn total(&self) -> usize {
        self.hits.iter().map(|h| h.count).sum()
    }

    /// Match count for a container, `0` if it had none.
    pub fn count_for(&self, container: &ContainerId) -> usize {
        self.hits
            .iter()
            .find(|h| &h.container == container)
            .map(|h| h.count)
            .unwrap_or(0)
    }
}

// =============================================================================
// ActionSearcher
// =============================================================================

/// Finds instances of an action type.
///
/// The visited set only lives for one [`find_instances`](Self::find_instances)
/// call; independent searches share no state.
#[derive(Debug, Default)]
pub struct ActionSearcher {
    mode: MatchMode,
    visited: HashSet<ContainerId>,
}

impl ActionSearcher {
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            visited: HashSet::new(),
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: MatchMode) {
        self.mode = mode;
    }

    /// Count instances of `target` in the given scope.
    ///
    /// Containers are never mutated.
    pub fn find_instances(&mut self, scope: SearchScope<'_>, target: &ActionType) -> SearchReport {
        self.visited.clear();

        let mut report = SearchReport {
            target: target.full_title(),
            ..Default::default()
        };

        match scope {
            SearchScope::Local(lists) => {
                for list in lists {
                    if self.visited.insert(list.id.clone()) {
                        self.scan_list(list, None, None, target, &mut report);
                    }
                }
            }
            SearchScope::Global { roots, scenes } => {
                self.search_scenes(scenes, target, &mut report);
                for (origin, reference) in roots.references() {
                    self.search_asset(roots, reference, origin, target, &mut report);
                }
            }
        }

        tracing::info!(
            "Found {} instances of '{}' in {} of {} action lists",
            report.total(),
            report.target,
            report.hits.len(),
            report.containers_scanned
        );

        self.visited.clear();
        report
    }

    /// Open each distinct scene once, in loader order, and scan its lists.
    fn search_scenes(
        &mut self,
        scenes: &mut dyn SceneLoader,
        target: &ActionType,
        report: &mut SearchReport,
    ) {
        let mut seen_scenes: HashSet<String> = HashSet::new();

        for scene in scenes.scene_files() {
            if !seen_scenes.insert(scene.clone()) {
                continue;
            }

            if scenes.current_scene().as_deref() != Some(scene.as_str()) {
                if let Err(e) = scenes.open_scene(&scene) {
                    tracing::warn!("Skipping scene {}: {}", scene, e);
                    continue;
                }
            }
            report.scenes_visited += 1;

            let mut seen_objects: HashSet<ContainerId> = HashSet::new();
            for list in scenes.scene_containers() {
                if seen_objects.insert(list.id.clone()) {
                    self.scan_list(&list, Some(&scene), None, target, report);
                }
            }
        }
    }

    /// Scan a referenced asset unless it is absent, stale or already visited.
    fn search_asset(
        &mut self,
        roots: &SearchRoots,
        reference: &AssetRef,
        origin: String,
        target: &ActionType,
        report: &mut SearchReport,
    ) {
        let Some(id) = reference else {
            return;
        };
        if !self.visited.insert(id.clone()) {
            return;
        }

        match roots.assets.get(id) {
            Some(list) => self.scan_list(list, None, Some(origin), target, report),
            None => tracing::debug!("Stale action list reference '{}' from {}", id, origin),
        }
    }

    /// Count matches in one list. Callers decide whether it was seen before.
    fn scan_list(
        &mut self,
        list: &ActionList,
        scene: Option<&str>,
        origin: Option<String>,
        target: &ActionType,
        report: &mut SearchReport,
    ) {
        report.containers_scanned += 1;

        let count = list
            .actions
            .iter()
            .filter(|action| self.mode.matches(*action, target))
            .count();

        if count == 0 {
            return;
        }

        match scene {
            Some(scene) => tracing::info!(
                "(Scene: {}) Found {} instances in '{}'",
                scene,
                count,
                list.name
            ),
            None => tracing::info!(
                "(Asset: {}) Found {} instances of '{}'",
                list.name,
                count,
                report.target
            ),
        }

        report.hits.push(SearchHit {
            container: list.id.clone(),
            name: list.name.clone(),
            scene: scene.map(str::to_string),
            origin,
            count,
        });
    }
}
