//! TOML manifest discovery.
//!
//! Expected shape:
//! ```toml
//! [[action]]
//! category = "Dialogue"
//! title = "Play speech"
//! file_name = "ActionSpeech"
//! description = "Makes a character talk."   # optional
//! enabled = true                            # optional, default true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use lantern_core::ActionType;

use super::DiscoveryProvider;
use crate::error::{DiscoveryError, DiscoveryResult};

/// Action types that ship with Lantern.
const BUILTIN_MANIFEST: &str = include_str!("builtin.toml");

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "action")]
    actions: Vec<ActionType>,
}

enum ManifestSource {
    File(PathBuf),
    Inline { origin: PathBuf, text: String },
}

/// Reads action type descriptors from a TOML manifest.
pub struct ManifestDiscovery {
    source: ManifestSource,
}

impl ManifestDiscovery {
    /// Discover from a manifest file, read on every `discover()` call.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: ManifestSource::File(path.into()),
        }
    }

    /// Discover from manifest text. `origin` is only used in errors and logs.
    pub fn from_text(origin: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            source: ManifestSource::Inline {
                origin: origin.into(),
                text: text.into(),
            },
        }
    }

    /// The built-in action set.
    pub fn builtin() -> Self {
        Self::from_text("<builtin>", BUILTIN_MANIFEST)
    }

    fn origin(&self) -> &Path {
        match &self.source {
            ManifestSource::File(path) => path,
            ManifestSource::Inline { origin, .. } => origin,
        }
    }
}

fn parse_manifest(path: &Path, text: &str) -> DiscoveryResult<Vec<ActionType>> {
    let manifest: Manifest = toml::from_str(text).map_err(|e| DiscoveryError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(manifest.actions)
}

impl DiscoveryProvider for ManifestDiscovery {
    fn name(&self) -> String {
        format!("manifest {}", self.origin().display())
    }

    fn discover(&self) -> DiscoveryResult<Vec<ActionType>> {
        match &self.source {
            ManifestSource::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| DiscoveryError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_manifest(path, &text)
            }
            ManifestSource::Inline { origin, text } => parse_manifest(origin, text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ActionCatalog;
    use lantern_core::ActionCategory;

    #[test]
    fn test_parse_inline_manifest() {
        let discovery = ManifestDiscovery::from_text(
            "test.toml",
            r#"
[[action]]
category = "Dialogue"
title = "Play speech"
file_name = "ActionSpeech"
description = "Makes a character talk."

[[action]]
category = "Camera"
title = "Shake"
file_name = "ActionCameraShake"
enabled = false
"#,
        );

        let types = discovery.discover().unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].description, "Makes a character talk.");
        assert!(types[0].is_enabled);
        assert_eq!(types[1].category, ActionCategory::Camera);
        assert!(!types[1].is_enabled);
    }

    #[test]
    fn test_empty_manifest() {
        let discovery = ManifestDiscovery::from_text("empty.toml", "");
        assert!(discovery.discover().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let discovery = ManifestDiscovery::from_text(
            "bad.toml",
            r#"
[[action]]
category = "Cooking"
title = "Stir"
file_name = "ActionStir"
"#,
        );
        assert!(matches!(
            discovery.discover(),
            Err(DiscoveryError::Parse { .. })
        ));
    }

    #[test]
    fn test_manifest_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actions.toml");
        std::fs::write(
            &path,
            "[[action]]\ncategory = \"Sound\"\ntitle = \"Play\"\nfile_name = \"ActionSound\"\n",
        )
        .unwrap();

        let types = ManifestDiscovery::from_file(&path).discover().unwrap();
        assert_eq!(types[0].file_name, "ActionSound");

        let missing = ManifestDiscovery::from_file(dir.path().join("missing.toml"));
        assert!(matches!(missing.discover(), Err(DiscoveryError::Io { .. })));
    }

    #[test]
    fn test_builtin_manifest_builds_a_catalog() {
        let types = ManifestDiscovery::builtin().discover().unwrap();
        assert!(!types.is_empty());

        // Built-in descriptors satisfy the catalog's uniqueness rules
        let catalog = ActionCatalog::from_types(types).unwrap();
        assert!(catalog.exists("ActionSpeech"));
        assert!(catalog.enabled_count() > 0);
    }
}
