//! Public API for the filesystem layer
//!
//! External modules should import from here rather than directly from
//! internal modules.

// Operation contract
pub use crate::fs::traits::{FileSystem, RandomAccessFile, WritableFile};

// Outcome classification
pub use crate::fs::code::StatusCode;
pub use crate::fs::error::{FsError, FsResult};

// Scheme registry
pub use crate::fs::registry::{FileSystemRegistry, SharedFileSystemRegistry};

// Built-in backend
pub use crate::fs::local::LocalFileSystem;

// URI/path helpers
pub use crate::fs::path::{clean_path, join, parse_uri, scheme_of};
