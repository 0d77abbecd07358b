//! Action type catalog for the Lantern adventure framework.
//!
//! This crate provides:
//! - `ActionCatalog` - the registry of known and enabled action types
//! - Discovery providers (TOML manifests, custom Lua action scripts)
//! - `ActionSearcher` - finds instances of an action type across scenes and assets

pub mod catalog;
pub mod discovery;
pub mod error;
pub mod search;

// Re-export commonly used types
pub use catalog::{ActionCatalog, CatalogSnapshot};
pub use discovery::{ChainedDiscovery, DiscoveryProvider, LuaScriptDiscovery, ManifestDiscovery};
pub use error::{CatalogError, CatalogResult, DiscoveryError, DiscoveryResult};
pub use search::{
    ActionSearcher, ActiveInput, AssetLibrary, AssetRef, ButtonClickType, CursorRoot,
    InventoryItem, InventoryRoot, MatchMode, Menu, MenuElement, MenuRoot, ProjectScenes, Recipe,
    SceneFile, SceneLoader, SearchHit, SearchReport, SearchRoots, SearchScope, SettingsRoot,
};

// Re-export lantern_core types for convenience
pub use lantern_core::{
    ActionCategory, ActionInstance, ActionKind, ActionList, ActionRecord, ActionType, ContainerId,
};
