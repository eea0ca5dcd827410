//! Slash-separated import path helpers
//!
//! Prefix checks work on whole segments: `github.com/foo` covers
//! `github.com/foo/bar` but not `github.com/foobar`.

/// Returns true if `path` equals `prefix` or lies below it
pub fn has_path_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return false;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Returns the parent import path, or `None` for a single segment
pub fn parent_path(path: &str) -> Option<&str> {
    path.rfind('/').map(|idx| &path[..idx]).filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_path_prefix_exact() {
        assert!(has_path_prefix("github.com/x/y", "github.com/x/y"));
    }

    #[test]
    fn test_has_path_prefix_child() {
        assert!(has_path_prefix("github.com/x/y/z", "github.com/x/y"));
        assert!(has_path_prefix("github.com/x/y/z", "github.com/x/y/"));
    }

    #[test]
    fn test_has_path_prefix_partial_segment() {
        assert!(!has_path_prefix("github.com/x/yz", "github.com/x/y"));
        assert!(!has_path_prefix("nethttp/x", "net"));
    }

    #[test]
    fn test_has_path_prefix_empty_prefix() {
        assert!(!has_path_prefix("github.com/x", ""));
        assert!(!has_path_prefix("github.com/x", "/"));
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("github.com/x/y"), Some("github.com/x"));
        assert_eq!(parent_path("github.com/x"), Some("github.com"));
        assert_eq!(parent_path("github.com"), None);
    }
}
