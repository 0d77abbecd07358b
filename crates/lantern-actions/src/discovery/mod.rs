//! Action type discovery.
//!
//! Discovery produces the ordered list of action types the catalog is
//! built from. Providers:
//! - [`ManifestDiscovery`] - descriptors listed in a TOML manifest
//!   (including the built-in set shipped with Lantern)
//! - [`LuaScriptDiscovery`] - custom action scripts in a project folder
//! - [`ChainedDiscovery`] - several providers in order, first one wins

mod lua;
mod manifest;

pub use lua::LuaScriptDiscovery;
pub use manifest::ManifestDiscovery;

use lantern_core::ActionType;

use crate::error::DiscoveryResult;

/// A source of action type descriptors.
#[cfg_attr(test, mockall::automock)]
pub trait DiscoveryProvider {
    /// Short label used in logs.
    fn name(&self) -> String;

    /// Produce descriptors in a stable order.
    fn discover(&self) -> DiscoveryResult<Vec<ActionType>>;
}

/// Runs several providers and concatenates their results.
///
/// A descriptor whose file name or (category, title) was already produced
/// by an earlier provider is dropped with a warning.
#[derive(Default)]
pub struct ChainedDiscovery {
    providers: Vec<Box<dyn DiscoveryProvider>>,
}

impl ChainedDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style provider append.
    pub fn with(mut self, provider: impl DiscoveryProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn push(&mut self, provider: Box<dyn DiscoveryProvider>) {
        self.providers.push(provider);
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl DiscoveryProvider for ChainedDiscovery {
    fn name(&self) -> String {
        let names: Vec<String> = self.providers.iter().map(|p| p.name()).collect();
        format!("chain[{}]", names.join(", "))
    }

    fn discover(&self) -> DiscoveryResult<Vec<ActionType>> {
        let mut found: Vec<ActionType> = Vec::new();

        for provider in &self.providers {
            let types = provider.discover()?;
            let total = types.len();
            let mut kept = 0;

            for action_type in types {
                let clash = found.iter().find(|t| {
                    t.file_name == action_type.file_name
                        || (t.category == action_type.category && t.title == action_type.title)
                });
                if let Some(existing) = clash {
                    tracing::warn!(
                        "Skipping '{}' from {}: clashes with '{}'",
                        action_type.file_name,
                        provider.name(),
                        existing.file_name
                    );
                    continue;
                }
                found.push(action_type);
                kept += 1;
            }

            tracing::info!(
                "Discovered {} action types from {} ({} skipped)",
                kept,
                provider.name(),
                total - kept
            );
        }

        Ok(found)
    }
}
