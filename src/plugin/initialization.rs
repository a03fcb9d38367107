//! Built-in provider initialization
//!
//! Registers every compatible statically-linked provider before any
//! requested module is processed, so the built-in backends are available
//! even when no `--module` argument is given.

use crate::fs::api::SharedFileSystemRegistry;
use crate::plugin::builtin;

/// Register all compatible built-in providers; returns how many registered
pub async fn load_builtin_providers(registry: &SharedFileSystemRegistry) -> usize {
    let system_api_version = crate::get_plugin_api_version();
    let mut registered = 0;

    for provider in builtin::all_providers() {
        let info = provider.info();
        if !provider.is_compatible(system_api_version) {
            log::warn!(
                "Skipping built-in provider '{}' (built for API {}, harness is {})",
                info.name,
                info.api_version,
                system_api_version
            );
            continue;
        }
        match provider.register_into(registry).await {
            Ok(()) => {
                log::debug!("Registered built-in provider '{}'", info.name);
                registered += 1;
            }
            Err(e) => {
                log::warn!("Built-in provider '{}' failed to register: {}", info.name, e);
            }
        }
    }

    registered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builtins_register_local_schemes() {
        let registry = SharedFileSystemRegistry::new();
        let count = load_builtin_providers(&registry).await;

        assert!(count >= 1);
        let schemes = registry.registered_schemes().await;
        assert!(schemes.contains(&"".to_string()));
        assert!(schemes.contains(&"file".to_string()));
    }

    #[tokio::test]
    async fn test_reinitialization_is_nonfatal() {
        let registry = SharedFileSystemRegistry::new();
        load_builtin_providers(&registry).await;
        // Second pass finds every scheme taken and registers nothing new
        let count = load_builtin_providers(&registry).await;
        assert_eq!(count, 0);
    }
}
