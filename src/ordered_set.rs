//! Insertion-ordered, duplicate-free path collection.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A set of paths that remembers the order of first insertion.
#[derive(Debug, Default, Clone)]
pub struct OrderedPathSet {
    members: HashSet<PathBuf>,
    order: Vec<PathBuf>,
}

impl OrderedPathSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a path. Returns false if it was already present (first insertion wins).
    pub fn insert(&mut self, path: PathBuf) -> bool {
        if self.members.contains(&path) {
            return false;
        }
        self.members.insert(path.clone());
        self.order.push(path);
        true
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.members.contains(path)
    }

    /// Remove a path, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, path: &Path) -> bool {
        if !self.members.remove(path) {
            return false;
        }
        self.order.retain(|p| p != path);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.order.iter()
    }
}

impl<'a> IntoIterator for &'a OrderedPathSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
