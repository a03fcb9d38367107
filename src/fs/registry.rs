//! Filesystem Registry
//!
//! Thread-safe registry associating URI schemes with loaded backend
//! implementations. Populated during provider registration, read-only once
//! scenario execution starts.

use crate::fs::error::{FsError, FsResult};
use crate::fs::path;
use crate::fs::traits::FileSystem;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Registry mapping scheme identifiers to backend instances
///
/// The empty scheme is a valid key and selects the local/no-scheme backend.
pub struct FileSystemRegistry {
    filesystems: HashMap<String, Arc<dyn FileSystem>>,
}

impl std::fmt::Debug for FileSystemRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSystemRegistry")
            .field("schemes", &self.registered_schemes())
            .finish()
    }
}

impl FileSystemRegistry {
    pub fn new() -> Self {
        Self {
            filesystems: HashMap::new(),
        }
    }

    /// Register a backend for a scheme
    ///
    /// A scheme can be claimed by exactly one backend for the process
    /// lifetime; a second registration is an error the loader reports as a
    /// failed load.
    pub fn register(&mut self, scheme: &str, filesystem: Arc<dyn FileSystem>) -> FsResult<()> {
        if self.filesystems.contains_key(scheme) {
            return Err(FsError::already_exists(format!(
                "scheme '{}' already has a registered filesystem",
                scheme
            )));
        }
        self.filesystems.insert(scheme.to_string(), filesystem);
        Ok(())
    }

    /// Backend registered for a scheme, if any
    pub fn get(&self, scheme: &str) -> Option<Arc<dyn FileSystem>> {
        self.filesystems.get(scheme).cloned()
    }

    pub fn has_scheme(&self, scheme: &str) -> bool {
        self.filesystems.contains_key(scheme)
    }

    /// All registered schemes, sorted for deterministic iteration
    pub fn registered_schemes(&self) -> Vec<String> {
        let mut schemes: Vec<String> = self.filesystems.keys().cloned().collect();
        schemes.sort();
        schemes
    }

    pub fn len(&self) -> usize {
        self.filesystems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filesystems.is_empty()
    }
}

impl Default for FileSystemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe shared filesystem registry
#[derive(Debug, Clone)]
pub struct SharedFileSystemRegistry {
    inner: Arc<RwLock<FileSystemRegistry>>,
}

impl SharedFileSystemRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(FileSystemRegistry::new())),
        }
    }

    pub async fn register(&self, scheme: &str, filesystem: Arc<dyn FileSystem>) -> FsResult<()> {
        self.inner.write().await.register(scheme, filesystem)
    }

    /// Backend for an exact scheme identifier
    pub async fn filesystem_for_scheme(&self, scheme: &str) -> Option<Arc<dyn FileSystem>> {
        self.inner.read().await.get(scheme)
    }

    /// Backend selected by the scheme of a URI reference
    pub async fn filesystem_for_uri(&self, reference: &str) -> Option<Arc<dyn FileSystem>> {
        self.filesystem_for_scheme(path::scheme_of(reference)).await
    }

    pub async fn registered_schemes(&self) -> Vec<String> {
        self.inner.read().await.registered_schemes()
    }

    pub async fn has_scheme(&self, scheme: &str) -> bool {
        self.inner.read().await.has_scheme(scheme)
    }
}

impl Default for SharedFileSystemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::local::LocalFileSystem;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = FileSystemRegistry::new();
        registry
            .register("", Arc::new(LocalFileSystem::new()))
            .unwrap();
        registry
            .register("file", Arc::new(LocalFileSystem::new()))
            .unwrap();

        assert!(registry.has_scheme(""));
        assert!(registry.has_scheme("file"));
        assert!(!registry.has_scheme("s3"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = FileSystemRegistry::new();
        registry
            .register("file", Arc::new(LocalFileSystem::new()))
            .unwrap();

        let err = registry
            .register("file", Arc::new(LocalFileSystem::new()))
            .unwrap_err();
        assert_eq!(err.code(), crate::fs::code::StatusCode::AlreadyExists);
    }

    #[test]
    fn test_registered_schemes_sorted() {
        let mut registry = FileSystemRegistry::new();
        registry
            .register("file", Arc::new(LocalFileSystem::new()))
            .unwrap();
        registry
            .register("", Arc::new(LocalFileSystem::new()))
            .unwrap();

        assert_eq!(registry.registered_schemes(), vec!["".to_string(), "file".to_string()]);
    }

    #[tokio::test]
    async fn test_shared_registry_uri_resolution() {
        let registry = SharedFileSystemRegistry::new();
        registry
            .register("file", Arc::new(LocalFileSystem::new()))
            .await
            .unwrap();

        assert!(registry.filesystem_for_uri("file:///tmp/x").await.is_some());
        assert!(registry.filesystem_for_uri("s3://bucket/x").await.is_none());
        // No scheme resolves to the empty scheme, which is not registered here
        assert!(registry.filesystem_for_uri("/tmp/x").await.is_none());
    }
}
