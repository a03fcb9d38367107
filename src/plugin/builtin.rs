//! Built-in backend provider table
//!
//! Statically-linked providers register themselves here at link time via the
//! `backend_provider!` macro. This is the safe in-process registration path
//! the loader resolves module names against.

use crate::fs::api::{LocalFileSystem, SharedFileSystemRegistry};
use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::traits::{BackendProvider, ProviderInfo};
use std::sync::Arc;

/// Entry for a statically-linked backend provider
pub struct ProviderEntry {
    pub factory: fn() -> Box<dyn BackendProvider>,
}

inventory::collect!(ProviderEntry);

/// Register a statically-linked backend provider for loader discovery
#[macro_export]
macro_rules! backend_provider {
    ($factory_expr:expr) => {
        inventory::submit!($crate::plugin::builtin::ProviderEntry {
            factory: $factory_expr,
        });
    };
}

/// Instantiate every provider in the table
pub fn all_providers() -> Vec<Box<dyn BackendProvider>> {
    inventory::iter::<ProviderEntry>()
        .map(|entry| (entry.factory)())
        .collect()
}

/// Find a provider by name
pub fn find_provider(name: &str) -> Option<Box<dyn BackendProvider>> {
    all_providers()
        .into_iter()
        .find(|provider| provider.info().name == name)
}

/// Provider for the local disk backend
///
/// Claims the empty scheme (plain paths) and `file`, mirroring how the local
/// filesystem is addressable both ways.
pub struct LocalBackendProvider;

#[async_trait::async_trait]
impl BackendProvider for LocalBackendProvider {
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: "local".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Local disk filesystem backend".to_string(),
            api_version: crate::get_plugin_api_version(),
        }
    }

    fn is_compatible(&self, system_api_version: u32) -> bool {
        system_api_version == self.info().api_version
    }

    async fn register_into(&self, registry: &SharedFileSystemRegistry) -> PluginResult<()> {
        for scheme in ["", "file"] {
            registry
                .register(scheme, Arc::new(LocalFileSystem::new()))
                .await
                .map_err(|e| PluginError::LoadError {
                    name: self.info().name,
                    cause: e.to_string(),
                })?;
        }
        Ok(())
    }
}

inventory::submit!(ProviderEntry {
    factory: || Box::new(LocalBackendProvider),
});
