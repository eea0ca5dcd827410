//! Remote URL extraction from `.git/config`

use crate::error::ResolveError;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// url = git@github.com:x/y.git
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^url\s*=\s*(\S.*)$").unwrap());

/// Location of the git config for a checkout directory
pub fn git_config_path(checkout: &Path) -> PathBuf {
    checkout.join(".git").join("config")
}

/// First `url = ...` value in git config text
pub fn parse_origin(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        URL_RE
            .captures(line.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim_end().to_string())
    })
}

/// Read the remote URL from a git config file
pub fn read_origin(config_path: &Path) -> Result<String, ResolveError> {
    let content =
        fs::read_to_string(config_path).map_err(|e| ResolveError::read_error(config_path, e))?;
    parse_origin(&content).ok_or_else(|| ResolveError::origin_not_found(config_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    const CONFIG: &str = r#"[core]
	repositoryformatversion = 0
	bare = false
[remote "origin"]
	url = git@github.com:x/y.git
	fetch = +refs/heads/*:refs/remotes/origin/*
[branch "master"]
	remote = origin
"#;

    #[test]
    fn test_parse_origin() {
        assert_eq!(parse_origin(CONFIG), Some("git@github.com:x/y.git".to_string()));
    }

    #[test]
    fn test_parse_origin_tolerates_spacing() {
        assert_eq!(
            parse_origin("  url=https://example.com/r.git  \n"),
            Some("https://example.com/r.git".to_string())
        );
    }

    #[test]
    fn test_parse_origin_first_url_wins() {
        let content = "[remote \"upstream\"]\n\turl = a\n[remote \"origin\"]\n\turl = b\n";
        assert_eq!(parse_origin(content), Some("a".to_string()));
    }

    #[test]
    fn test_parse_origin_ignores_similar_keys() {
        assert_eq!(parse_origin("\tpushurl = x\n\turlx = y\n"), None);
    }

    #[test]
    fn test_read_origin_without_url() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "[core]\n\tbare = false\n").unwrap();
        let err = read_origin(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotExist);
    }

    #[test]
    fn test_git_config_path() {
        assert_eq!(
            git_config_path(Path::new("/go/src/github.com/x/y")),
            PathBuf::from("/go/src/github.com/x/y/.git/config")
        );
    }
}
