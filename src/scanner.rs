//! Bottom-up directory scanning
//!
//! Walks each root children-before-parent and decides, per directory, whether
//! it would be empty once every queued removal is applied.

use crate::error::PruneError;
use crate::ordered_set::OrderedPathSet;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Paths collected for removal, shared across all roots of a run
#[derive(Debug, Default)]
pub struct Removals {
    /// Zero-byte regular files, in discovery order
    pub empty_files: OrderedPathSet,
    /// Removable directories; descendants always precede their ancestors
    pub removable_dirs: OrderedPathSet,
    /// Roots dropped from `removable_dirs` by the exclusion step
    pub kept_roots: Vec<PathBuf>,
}

impl Removals {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Post-order scanner
pub struct Scanner {
    keep_empty_files: bool,
    /// Directories already walked by an earlier root
    visited: HashSet<PathBuf>,
}

impl Scanner {
    pub fn new(keep_empty_files: bool) -> Self {
        Self {
            keep_empty_files,
            visited: HashSet::new(),
        }
    }

    /// Scan one root, adding its removable files and directories to `removals`.
    ///
    /// # Returns
    /// * `Ok(())` - the root was walked (or had already been walked)
    /// * `Err(PruneError::InvalidRoot)` - the root is missing, not a directory, or unreadable
    pub fn scan(&mut self, root: &Path, removals: &mut Removals) -> Result<(), PruneError> {
        let metadata = fs::metadata(root).map_err(|e| PruneError::InvalidRoot {
            path: root.to_path_buf(),
            source: Some(e),
        })?;
        if !metadata.is_dir() {
            return Err(PruneError::InvalidRoot {
                path: root.to_path_buf(),
                source: None,
            });
        }
        if self.visited.contains(root) {
            return Ok(());
        }

        // Root listing errors are fatal for this root; below the root they only keep the parent.
        let entries = fs::read_dir(root).map_err(|e| PruneError::InvalidRoot {
            path: root.to_path_buf(),
            source: Some(e),
        })?;
        self.visited.insert(root.to_path_buf());
        self.classify(root, entries, removals);
        Ok(())
    }

    /// Visit a subdirectory. Returns true if it is removable.
    fn visit(&mut self, dir: &Path, removals: &mut Removals) -> bool {
        if !self.visited.insert(dir.to_path_buf()) {
            return removals.removable_dirs.contains(dir);
        }

        match fs::read_dir(dir) {
            Ok(entries) => self.classify(dir, entries, removals),
            Err(e) => {
                eprintln!(
                    "prune-empty: warning: cannot read directory '{}': {}",
                    dir.display(),
                    e
                );
                false
            }
        }
    }

    /// Inspect the direct entries of `dir`, recursing into subdirectories first.
    fn classify(&mut self, dir: &Path, entries: fs::ReadDir, removals: &mut Removals) -> bool {
        let mut keep = false;

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    eprintln!(
                        "prune-empty: warning: cannot read entry in '{}': {}",
                        dir.display(),
                        e
                    );
                    keep = true;
                    continue;
                }
            };
            let path = entry.path();

            // file_type() does not follow symlinks
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(_) => {
                    keep = true;
                    continue;
                }
            };

            if file_type.is_dir() {
                // Always recurse so nested removals are collected even when `dir` is kept
                if !self.visit(&path, removals) {
                    keep = true;
                }
            } else if file_type.is_file() {
                if self.keep_empty_files {
                    keep = true;
                    continue;
                }
                match entry.metadata() {
                    Ok(metadata) if metadata.len() == 0 => {
                        removals.empty_files.insert(path);
                    }
                    _ => keep = true,
                }
            } else {
                // symlinks, sockets, fifos, devices
                keep = true;
            }
        }

        if !keep {
            removals.removable_dirs.insert(dir.to_path_buf());
        }
        !keep
    }
}
