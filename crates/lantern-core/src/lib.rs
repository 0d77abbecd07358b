//! Core types for the Lantern adventure framework.
//!
//! This crate contains shared data structures that are used across all Lantern crates:
//! - Action type descriptors and categories
//! - The action instance trait and the serializable action record
//! - Action containers (action lists)
//! - The animation engine capability
//! - Configuration types
//! - Error types

mod action;
mod anim;
mod config;
mod container;
mod error;
mod instance;

pub use action::{ActionCategory, ActionKind, ActionType, LEGACY_PREFIX};
pub use anim::{AnimEngine, TurningStyle};
pub use config::{
    config_dir, settings_path, ActionsSettings, DisplayActionsInEditor, ScrollWheelBehaviour,
};
pub use container::{ActionList, ContainerId};
pub use error::{ConfigError, SceneError};
pub use instance::{ActionInstance, ActionRecord};
