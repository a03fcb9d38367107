//! Test root allocation
//!
//! Every scenario instance runs in its own directory under the platform
//! temporary directory. Roots combine one process-lifetime random seed with
//! the instance name, so two runs are unlikely to clash and two instances in
//! the same run never can.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static RUN_SEED: OnceLock<u32> = OnceLock::new();

/// Random seed shared by every root in this process, drawn on first use
pub fn run_seed() -> u32 {
    *RUN_SEED.get_or_init(rand::random)
}

/// Make a name usable as a single path segment
pub fn sanitize_name(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

/// Isolated root path for a scenario instance
pub fn root_for(instance_name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "fsconform_{}_{}",
        run_seed(),
        sanitize_name(instance_name)
    ))
}

/// Create a root directory with restrictive-but-usable permissions
pub fn create_root(path: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        std::fs::DirBuilder::new().mode(0o755).create(path)
    }
    #[cfg(not(unix))]
    {
        std::fs::DirBuilder::new().create(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_stable_within_process() {
        assert_eq!(run_seed(), run_seed());
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("create_file/0"), "create_file_0");
        assert_eq!(sanitize_name("plain"), "plain");
        assert_eq!(sanitize_name("a\\b/c"), "a_b_c");
    }

    #[test]
    fn test_roots_differ_by_name() {
        let a = root_for("create_file/0");
        let b = root_for("create_file/1");
        assert_ne!(a, b);
    }

    #[test]
    fn test_root_is_single_segment_under_tmp() {
        let root = root_for("read_file/2");
        assert_eq!(root.parent(), Some(std::env::temp_dir().as_path()));
    }

    #[test]
    fn test_create_root() {
        let scratch = tempfile::tempdir().unwrap();
        let root = scratch.path().join("work");
        create_root(&root).unwrap();
        assert!(root.is_dir());

        // A second creation attempt must surface the error to the caller
        assert!(create_root(&root).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_root_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let scratch = tempfile::tempdir().unwrap();
        let root = scratch.path().join("perms");
        create_root(&root).unwrap();

        // The process umask may mask group/other bits; owner bits survive
        // and group/other write must never appear
        let mode = std::fs::metadata(&root).unwrap().permissions().mode();
        assert_eq!(mode & 0o700, 0o700);
        assert_eq!(mode & 0o022, 0);
    }
}
