//! Backend module loading
//!
//! Resolves a requested module reference against the provider table, checks
//! API compatibility and invokes the provider's initialization entry point.
//! A failed load is logged and reported as `false`; it never aborts the run,
//! it only keeps that module's schemes out of the available set.

use crate::core::error_handling::log_error_with_context;
use crate::fs::api::SharedFileSystemRegistry;
use crate::plugin::builtin;
use crate::plugin::error::{PluginError, PluginResult};
use std::path::Path;

/// Load one backend module into the registry
///
/// `module_ref` is either a bare provider name or a path whose file stem
/// names the provider (a leading `lib` prefix is ignored, so
/// `/plugins/liblocal.so` resolves the provider `local`). Each call is
/// independent: a failure here has no effect on other loads.
pub async fn load(module_ref: &str, registry: &SharedFileSystemRegistry) -> bool {
    let name = provider_name_of(module_ref);
    match try_load(&name, registry).await {
        Ok(()) => {
            log::info!("Loaded backend module '{}'", module_ref);
            true
        }
        Err(e) => {
            log_error_with_context(&e, "Loading backend module");
            false
        }
    }
}

async fn try_load(name: &str, registry: &SharedFileSystemRegistry) -> PluginResult<()> {
    let provider = builtin::find_provider(name).ok_or_else(|| PluginError::ProviderNotFound {
        name: name.to_string(),
    })?;

    let system_api_version = crate::get_plugin_api_version();
    if !provider.is_compatible(system_api_version) {
        return Err(PluginError::VersionIncompatible {
            name: name.to_string(),
            system_api_version,
        });
    }

    provider.register_into(registry).await
}

/// Provider name for a module reference
fn provider_name_of(module_ref: &str) -> String {
    let stem = Path::new(module_ref)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(module_ref);
    stem.strip_prefix("lib").unwrap_or(stem).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_name_of() {
        assert_eq!(provider_name_of("local"), "local");
        assert_eq!(provider_name_of("/plugins/local.so"), "local");
        assert_eq!(provider_name_of("/plugins/liblocal.so"), "local");
        assert_eq!(provider_name_of("plugins/libmem.dylib"), "mem");
    }

    #[tokio::test]
    async fn test_load_builtin_local() {
        let registry = SharedFileSystemRegistry::new();
        assert!(load("local", &registry).await);
        assert!(registry.has_scheme("file").await);
        assert!(registry.has_scheme("").await);
    }

    #[tokio::test]
    async fn test_load_missing_module_is_nonfatal() {
        let registry = SharedFileSystemRegistry::new();
        assert!(!load("/plugins/libnothere.so", &registry).await);
        // The registry is untouched and further loads still work
        assert!(registry.registered_schemes().await.is_empty());
        assert!(load("local", &registry).await);
    }

    #[tokio::test]
    async fn test_double_load_fails_second_time() {
        let registry = SharedFileSystemRegistry::new();
        assert!(load("local", &registry).await);
        // Second load fails on duplicate scheme registration, run continues
        assert!(!load("local", &registry).await);
        assert!(registry.has_scheme("file").await);
    }
}
