//! URI and path handling
//!
//! Pure helpers shared by the name-translation contract, the registry's
//! scheme resolution, and the harness's URI construction. Everything here is
//! lexical; no function touches the filesystem.

/// Split a reference of form `[<scheme>://[<authority>]]<path>` into its parts
///
/// Returns `(scheme, authority, path)`. A reference without a scheme marker
/// yields an empty scheme and authority, with the whole input as the path.
/// The authority is everything between the marker and the first `/`; the path
/// keeps its leading `/` when present.
pub fn parse_uri(reference: &str) -> (&str, &str, &str) {
    let Some(marker) = reference.find("://") else {
        return ("", "", reference);
    };
    let scheme = &reference[..marker];
    if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphanumeric()) {
        return ("", "", reference);
    }

    let rest = &reference[marker + 3..];
    match rest.find('/') {
        Some(slash) => (scheme, &rest[..slash], &rest[slash..]),
        None => (scheme, rest, ""),
    }
}

/// Scheme of a reference, empty for plain local paths
pub fn scheme_of(reference: &str) -> &str {
    parse_uri(reference).0
}

/// Lexically normalize a path
///
/// Collapses redundant separators, removes `.` segments and resolves `..`
/// against the segment it follows. Unresolvable leading `..` segments are
/// kept for relative paths and dropped at the root for absolute ones. A
/// relative path that cancels out completely becomes `.`.
pub fn clean_path(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&"..") | None => {
                    if !absolute {
                        segments.push("..");
                    }
                }
                Some(_) => {
                    segments.pop();
                }
            },
            other => segments.push(other),
        }
    }

    let body = segments.join("/");
    if absolute {
        format!("/{}", body)
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}

/// Join a base path or URI with a relative part, avoiding doubled separators
pub fn join(base: &str, part: &str) -> String {
    if base.is_empty() {
        return part.to_string();
    }
    if part.is_empty() {
        return base.to_string();
    }
    match (base.ends_with('/'), part.starts_with('/')) {
        (true, true) => format!("{}{}", base, &part[1..]),
        (false, false) => format!("{}/{}", base, part),
        _ => format!("{}{}", base, part),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uri_plain_path() {
        assert_eq!(parse_uri("/tmp/a_file"), ("", "", "/tmp/a_file"));
        assert_eq!(parse_uri("a_file"), ("", "", "a_file"));
        assert_eq!(parse_uri(""), ("", "", ""));
    }

    #[test]
    fn test_parse_uri_with_scheme() {
        assert_eq!(parse_uri("file:///tmp/x"), ("file", "", "/tmp/x"));
        assert_eq!(parse_uri("s3://bucket/key"), ("s3", "bucket", "/key"));
        assert_eq!(parse_uri("s3://bucket"), ("s3", "bucket", ""));
        assert_eq!(parse_uri("s3://"), ("s3", "", ""));
    }

    #[test]
    fn test_parse_uri_rejects_bogus_scheme() {
        // A marker without a plausible scheme is treated as path text
        assert_eq!(parse_uri("://x"), ("", "", "://x"));
        assert_eq!(parse_uri("a b://x"), ("", "", "a b://x"));
    }

    #[test]
    fn test_clean_path_root_forms() {
        assert_eq!(clean_path("/"), "/");
        assert_eq!(clean_path("//"), "/");
        assert_eq!(clean_path("/.."), "/");
        assert_eq!(clean_path("/../a"), "/a");
    }

    #[test]
    fn test_clean_path_relative_forms() {
        assert_eq!(clean_path("a_file"), "a_file");
        assert_eq!(clean_path("./a_file"), "a_file");
        assert_eq!(clean_path("a_dir/.."), ".");
        assert_eq!(clean_path("../a"), "../a");
        assert_eq!(clean_path("../../a/.."), "../..");
    }

    #[test]
    fn test_clean_path_convoluted() {
        assert_eq!(
            clean_path("a/convoluted/../path/./to/.//.///a/file"),
            "a/path/to/a/file"
        );
    }

    #[test]
    fn test_clean_path_idempotent() {
        for input in [
            "/",
            "//",
            "a_dir/..",
            "a/convoluted/../path/./to/.//.///a/file",
            "/a/b/c",
            "../x",
        ] {
            let once = clean_path(input);
            assert_eq!(clean_path(&once), once, "clean_path not stable for {:?}", input);
        }
    }

    #[test]
    fn test_join() {
        assert_eq!(join("/tmp/root", "a_file"), "/tmp/root/a_file");
        assert_eq!(join("/tmp/root/", "a_file"), "/tmp/root/a_file");
        assert_eq!(join("/tmp/root/", "/a_file"), "/tmp/root/a_file");
        assert_eq!(join("", "a_file"), "a_file");
        assert_eq!(join("/tmp/root", ""), "/tmp/root");
    }
}
