//! Per-scenario test context
//!
//! Holds the resolved scheme, the isolated root directory and the backend
//! under test for exactly one scenario instance. Never shared: every
//! instance gets a fresh root so scenarios cannot interfere. The root is
//! removed best-effort on drop.

use crate::fs::api::{join, FileSystem, SharedFileSystemRegistry};
use crate::harness::verdict::Verdict;
use crate::harness::workdir;
use std::path::PathBuf;
use std::sync::Arc;

pub struct TestContext {
    scheme: String,
    root: PathBuf,
    filesystem: Arc<dyn FileSystem>,
}

impl TestContext {
    /// Prepare an isolated context for one scenario instance
    ///
    /// Returns a Verdict instead of an error when the scenario cannot run:
    /// Skip for a scheme without a usable backend, and Skip for a root
    /// directory that cannot be created (environment problem, not a backend
    /// defect).
    pub async fn new(
        scheme: &str,
        instance_name: &str,
        registry: &SharedFileSystemRegistry,
    ) -> Result<TestContext, Verdict> {
        let Some(filesystem) = registry.filesystem_for_scheme(scheme).await else {
            return Err(Verdict::skip(format!(
                "no filesystem registered for scheme '{}'",
                scheme
            )));
        };

        let root = workdir::root_for(instance_name);
        if let Err(e) = workdir::create_root(&root) {
            return Err(Verdict::skip(format!(
                "cannot create working directory {}: {}",
                root.display(),
                e
            )));
        }

        Ok(TestContext {
            scheme: scheme.to_string(),
            root,
            filesystem,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn filesystem(&self) -> &dyn FileSystem {
        self.filesystem.as_ref()
    }

    /// Scheme-qualified reference for a path under this context's root
    pub fn uri_for(&self, path: &str) -> String {
        let full = join(&self.root.to_string_lossy(), path);
        if self.scheme.is_empty() {
            full
        } else {
            format!("{}://{}", self.scheme, full)
        }
    }

    /// Strip this context's root from a translated absolute path
    pub fn relative_path<'a>(&self, absolute: &'a str) -> &'a str {
        let root = self.root.to_string_lossy();
        absolute.strip_prefix(root.as_ref()).unwrap_or(absolute)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Cleanup is best-effort; the seeded name keeps stale roots from
        // colliding with later runs
        if let Err(e) = std::fs::remove_dir_all(&self.root) {
            log::trace!(
                "Leaving working directory {} behind: {}",
                self.root.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::api::load_builtin_providers;

    async fn local_registry() -> SharedFileSystemRegistry {
        let registry = SharedFileSystemRegistry::new();
        load_builtin_providers(&registry).await;
        registry
    }

    #[tokio::test]
    async fn test_context_creates_and_removes_root() {
        let registry = local_registry().await;
        let root = {
            let ctx = TestContext::new("", "ctx_lifecycle/0", &registry)
                .await
                .expect("context");
            let root = ctx.uri_for("");
            assert!(std::path::Path::new(&root).is_dir());
            root
        };
        assert!(!std::path::Path::new(&root).exists());
    }

    #[tokio::test]
    async fn test_unknown_scheme_skips() {
        let registry = SharedFileSystemRegistry::new();
        let err = TestContext::new("s3", "ctx_unknown/0", &registry)
            .await
            .err()
            .expect("no backend");
        assert!(err.is_skip());
    }

    #[tokio::test]
    async fn test_uri_for_empty_scheme_is_plain_path() {
        let registry = local_registry().await;
        let ctx = TestContext::new("", "ctx_plain/0", &registry).await.unwrap();

        let uri = ctx.uri_for("a_file");
        assert!(!uri.contains("://"));
        assert!(uri.ends_with("/a_file"));
    }

    #[tokio::test]
    async fn test_uri_for_file_scheme_is_qualified() {
        let registry = local_registry().await;
        let ctx = TestContext::new("file", "ctx_scheme/0", &registry)
            .await
            .unwrap();

        let uri = ctx.uri_for("a_file");
        assert!(uri.starts_with("file://"));
        assert!(uri.ends_with("/a_file"));
    }

    #[tokio::test]
    async fn test_relative_path_strips_root() {
        let registry = local_registry().await;
        let ctx = TestContext::new("", "ctx_rel/0", &registry).await.unwrap();

        let translated = ctx.filesystem().translate_name(&ctx.uri_for("a_file"));
        assert_eq!(ctx.relative_path(&translated), "/a_file");
    }
}
