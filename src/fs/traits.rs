//! Filesystem Trait System
//!
//! The operation contract every backend must satisfy. A backend produces
//! opaque file handles; the conformance matrix only ever inspects the
//! canonical status code of each operation, not handle contents.
//!
//! Backends that do not support an operation return
//! `StatusCode::Unimplemented` for it; the harness treats that as an
//! acceptable substitute for the expected code.

use crate::fs::error::FsResult;
use crate::fs::path;

/// A filesystem backend bound to one or more URI schemes
#[async_trait::async_trait]
pub trait FileSystem: Send + Sync {
    /// Create a writable file, truncating any existing content
    async fn new_writable_file(&self, path: &str) -> FsResult<Box<dyn WritableFile>>;

    /// Open a file for appending, creating it if absent
    async fn new_appendable_file(&self, path: &str) -> FsResult<Box<dyn WritableFile>>;

    /// Open an existing file for positioned reads; fails if absent
    async fn new_random_access_file(&self, path: &str) -> FsResult<Box<dyn RandomAccessFile>>;

    /// Create a single directory; the parent must already exist
    async fn create_directory(&self, path: &str) -> FsResult<()>;

    /// Convert a scheme-qualified reference into a canonical internal path
    ///
    /// Pure and idempotent: the output depends only on the input string and
    /// never on filesystem state. The default covers the common URI layout;
    /// backends with exotic path syntax may override.
    fn translate_name(&self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }
        let (_, _, file_path) = path::parse_uri(name);
        if file_path.is_empty() {
            return "/".to_string();
        }
        path::clean_path(file_path)
    }
}

/// Write handle produced by `new_writable_file` / `new_appendable_file`
#[async_trait::async_trait]
pub trait WritableFile: Send {
    /// Append bytes at the current write position
    async fn append(&mut self, data: &[u8]) -> FsResult<()>;

    /// Flush buffered writes to the backing store
    async fn flush(&mut self) -> FsResult<()>;
}

/// Read handle produced by `new_random_access_file`
#[async_trait::async_trait]
pub trait RandomAccessFile: Send + Sync {
    /// Read up to `len` bytes starting at `offset`
    ///
    /// A short read past end-of-file is not an error; the returned buffer is
    /// simply smaller than requested.
    async fn read_at(&self, offset: u64, len: usize) -> FsResult<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::error::FsError;

    // Minimal backend exercising the default translation only
    struct NullFileSystem;

    #[async_trait::async_trait]
    impl FileSystem for NullFileSystem {
        async fn new_writable_file(&self, _path: &str) -> FsResult<Box<dyn WritableFile>> {
            Err(FsError::unimplemented("new_writable_file"))
        }

        async fn new_appendable_file(&self, _path: &str) -> FsResult<Box<dyn WritableFile>> {
            Err(FsError::unimplemented("new_appendable_file"))
        }

        async fn new_random_access_file(
            &self,
            _path: &str,
        ) -> FsResult<Box<dyn RandomAccessFile>> {
            Err(FsError::unimplemented("new_random_access_file"))
        }

        async fn create_directory(&self, _path: &str) -> FsResult<()> {
            Err(FsError::unimplemented("create_directory"))
        }
    }

    #[test]
    fn test_default_translate_empty_input() {
        assert_eq!(NullFileSystem.translate_name(""), "");
    }

    #[test]
    fn test_default_translate_authority_marker() {
        assert_eq!(NullFileSystem.translate_name("mem://"), "/");
        assert_eq!(NullFileSystem.translate_name("mem:///"), "/");
        assert_eq!(NullFileSystem.translate_name("mem:////"), "/");
    }

    #[test]
    fn test_default_translate_local_forms() {
        assert_eq!(NullFileSystem.translate_name("/"), "/");
        assert_eq!(NullFileSystem.translate_name("//"), "/");
        assert_eq!(NullFileSystem.translate_name("a_file"), "a_file");
        assert_eq!(NullFileSystem.translate_name("a_dir/.."), ".");
    }

    #[test]
    fn test_default_translate_idempotent() {
        let fs = NullFileSystem;
        for input in ["mem:///a/b/../c", "/x/./y", "a_file", ""] {
            let once = fs.translate_name(input);
            assert_eq!(fs.translate_name(&once), once);
        }
    }
}
