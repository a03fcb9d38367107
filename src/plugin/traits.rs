//! Backend Provider Trait System
//!
//! A backend module is represented by a `BackendProvider`: a capability
//! object that knows how to register one or more filesystem backends into
//! the shared registry. Statically-linked providers reach the loader through
//! the provider table in `plugin::builtin`; there is deliberately no raw
//! symbol-resolution boundary in this harness.

use crate::fs::api::SharedFileSystemRegistry;
use crate::plugin::error::PluginResult;

/// Provider metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    /// API version the provider was built against
    pub api_version: u32,
}

/// A loadable backend module
#[async_trait::async_trait]
pub trait BackendProvider: Send + Sync {
    /// Provider metadata; `name` is the identity used by `--module`
    fn info(&self) -> ProviderInfo;

    /// Compatibility with the harness API version
    ///
    /// The default returns false so providers state their requirements
    /// explicitly.
    fn is_compatible(&self, _system_api_version: u32) -> bool {
        false
    }

    /// Initialization entry point: register this provider's schemes
    ///
    /// Called at most once per run. Registration failures (including a
    /// scheme already claimed by another backend) make the load fail without
    /// aborting the run.
    async fn register_into(&self, registry: &SharedFileSystemRegistry) -> PluginResult<()>;
}
