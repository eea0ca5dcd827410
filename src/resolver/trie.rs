//! Segment trie of already-solved package paths

use std::collections::BTreeMap;

/// Set of import paths supporting "is any ancestor recorded" queries
#[derive(Debug, Default)]
pub struct SolvedPaths {
    root: Node,
}

#[derive(Debug, Default)]
struct Node {
    terminal: bool,
    children: BTreeMap<String, Node>,
}

impl SolvedPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a solved package path
    pub fn insert(&mut self, path: &str) {
        let mut node = &mut self.root;
        for segment in segments(path) {
            node = node.children.entry(segment.to_string()).or_default();
        }
        node.terminal = true;
    }

    /// Returns the recorded path equal to or above `path`, if any
    pub fn covering(&self, path: &str) -> Option<String> {
        let mut node = &self.root;
        let mut matched = Vec::new();
        for segment in segments(path) {
            node = node.children.get(segment)?;
            matched.push(segment);
            if node.terminal {
                return Some(matched.join("/"));
            }
        }
        None
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
