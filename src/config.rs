//! Run configuration for prune-empty
//!
//! Holds the policy flags and normalized roots for a single invocation.
//! Built once from the command line and passed by reference to the scanner
//! and remover.

use crate::path_checker::PathChecker;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Policy for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneConfig {
    /// Normalized, de-duplicated root directories in argument order
    pub roots: Vec<PathBuf>,
    /// Report actions without touching the filesystem
    pub dry_run: bool,
    /// Never remove zero-byte files
    pub keep_empty_files: bool,
    /// Allow the roots themselves to be removed
    pub remove_empty_roots: bool,
    /// Suppress per-item success notices
    pub quiet: bool,
}

impl PruneConfig {
    /// Build a config whose roots are normalized against `cwd`.
    ///
    /// An empty `paths` list means the current directory.
    pub fn new(cwd: &Path, paths: &[PathBuf]) -> Self {
        let mut seen = HashSet::new();
        let mut roots = Vec::new();

        let defaults = [PathBuf::from(".")];
        let paths = if paths.is_empty() { &defaults[..] } else { paths };

        for path in paths {
            let root = PathChecker::normalize_root(cwd, path);
            if seen.insert(root.clone()) {
                roots.push(root);
            }
        }

        Self {
            roots,
            ..Self::default()
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_keep_empty_files(mut self, keep_empty_files: bool) -> Self {
        self.keep_empty_files = keep_empty_files;
        self
    }

    pub fn with_remove_empty_roots(mut self, remove_empty_roots: bool) -> Self {
        self.remove_empty_roots = remove_empty_roots;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root_is_cwd() {
        let config = PruneConfig::new(Path::new("/work"), &[]);
        assert_eq!(config.roots, vec![PathBuf::from("/work")]);
    }

    #[test]
    fn test_default_flags_are_off() {
        let config = PruneConfig::new(Path::new("/work"), &[]);
        assert!(!config.dry_run);
        assert!(!config.keep_empty_files);
        assert!(!config.remove_empty_roots);
        assert!(!config.quiet);
    }

    #[test]
    fn test_roots_are_normalized() {
        let config = PruneConfig::new(
            Path::new("/work"),
            &[PathBuf::from("a/./b/"), PathBuf::from("/abs/../x")],
        );
        assert_eq!(
            config.roots,
            vec![PathBuf::from("/work/a/b"), PathBuf::from("/x")]
        );
    }

    #[test]
    fn test_duplicate_roots_are_collapsed() {
        let config = PruneConfig::new(
            Path::new("/work"),
            &[
                PathBuf::from("a"),
                PathBuf::from("/work/a/"),
                PathBuf::from("b"),
                PathBuf::from("./a"),
            ],
        );
        assert_eq!(
            config.roots,
            vec![PathBuf::from("/work/a"), PathBuf::from("/work/b")]
        );
    }

    #[test]
    fn test_builder_flags() {
        let config = PruneConfig::new(Path::new("/work"), &[])
            .with_dry_run(true)
            .with_keep_empty_files(true)
            .with_remove_empty_roots(true)
            .with_quiet(true);
        assert!(config.dry_run);
        assert!(config.keep_empty_files);
        assert!(config.remove_empty_roots);
        assert!(config.quiet);
    }
}
