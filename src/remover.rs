//! Removal of collected paths
//!
//! Applies the scanner's results: root exclusion first, then empty files,
//! then directories. A failure on one item never stops the rest.

use crate::config::PruneConfig;
use crate::error::{Action, PruneError};
use crate::path_checker::PathChecker;
use crate::scanner::Removals;
use std::fs;
use std::path::{Path, PathBuf};

/// Why a directory was left in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The directory is the current working directory
    CurrentDir,
    /// The directory contains the current working directory
    ContainsCurrentDir,
    /// The directory contains a root that was kept
    ContainsKeptRoot,
}

/// Result of one removal attempt
#[derive(Debug)]
pub enum Status {
    Removed,
    Skipped(SkipReason),
    Failed(PruneError),
}

/// Per-item outcome record
#[derive(Debug)]
pub struct Outcome {
    pub path: PathBuf,
    pub action: Action,
    pub status: Status,
}

/// All outcomes of an apply pass, in processing order
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub outcomes: Vec<Outcome>,
}

impl ApplyReport {
    pub fn removed(&self) -> usize {
        self.count(|s| matches!(s, Status::Removed))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, Status::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, Status::Failed(_)))
    }

    /// True when no attempted removal failed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, pred: impl Fn(&Status) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

/// Applies removals according to a run configuration
pub struct Remover<'a> {
    config: &'a PruneConfig,
    /// Real path of the working directory, if it could be resolved
    cwd: Option<PathBuf>,
}

impl<'a> Remover<'a> {
    /// `cwd` is resolved to its real path here; an unresolvable cwd disables the protection.
    pub fn new(config: &'a PruneConfig, cwd: Option<&Path>) -> Self {
        Self {
            config,
            cwd: cwd.and_then(|p| p.canonicalize().ok()),
        }
    }

    /// Drop the configured roots from the removable directories unless
    /// `remove_empty_roots` is set. Returns the roots that were dropped.
    ///
    /// Dropped roots are remembered in `removals.kept_roots`; queued
    /// directories containing one of them are skipped by `apply`.
    pub fn exclude_roots(&self, removals: &mut Removals) -> Vec<PathBuf> {
        if self.config.remove_empty_roots {
            return Vec::new();
        }

        let mut excluded = Vec::new();
        for root in &self.config.roots {
            if removals.removable_dirs.remove(root) {
                if !self.config.quiet {
                    println!("Keeping root directory: {}", root.display());
                }
                excluded.push(root.clone());
            }
        }
        removals.kept_roots.extend(excluded.iter().cloned());
        excluded
    }

    /// Remove empty files, then removable directories.
    pub fn apply(&self, removals: &Removals) -> ApplyReport {
        let mut report = ApplyReport::default();

        for path in &removals.empty_files {
            let status = self.remove(path, Action::File);
            report.outcomes.push(Outcome {
                path: path.clone(),
                action: Action::File,
                status,
            });
        }

        for path in &removals.removable_dirs {
            let status = match self.protection(path, &removals.kept_roots) {
                Some(reason) => {
                    notice_skip(path, reason);
                    Status::Skipped(reason)
                }
                None => self.remove(path, Action::Directory),
            };
            report.outcomes.push(Outcome {
                path: path.clone(),
                action: Action::Directory,
                status,
            });
        }

        report
    }

    /// Check whether `dir` is, or contains, the working directory or a kept root
    fn protection(&self, dir: &Path, kept_roots: &[PathBuf]) -> Option<SkipReason> {
        if let Some(cwd) = self.cwd.as_deref() {
            let real = PathChecker::try_canonicalize(dir);
            if real == cwd {
                return Some(SkipReason::CurrentDir);
            }
            if PathChecker::is_contained(&real, cwd) {
                return Some(SkipReason::ContainsCurrentDir);
            }
        }

        // roots and queued paths are both normalized, so a lexical check is enough
        kept_roots
            .iter()
            .any(|root| root.as_path() != dir && PathChecker::is_contained(dir, root))
            .then_some(SkipReason::ContainsKeptRoot)
    }

    fn remove(&self, path: &Path, action: Action) -> Status {
        if !self.config.dry_run {
            let result = match action {
                Action::File => fs::remove_file(path),
                Action::Directory => fs::remove_dir(path),
            };
            if let Err(e) = result {
                let err = PruneError::RemoveFailed {
                    path: path.to_path_buf(),
                    action,
                    source: e,
                };
                eprintln!("prune-empty: {}", err);
                return Status::Failed(err);
            }
        }

        if !self.config.quiet {
            match action {
                Action::File => println!("Removed empty file: {}", path.display()),
                Action::Directory => println!("Removed empty directory: {}", path.display()),
            }
        }
        Status::Removed
    }
}

/// Protective notices are printed even in quiet mode
fn notice_skip(path: &Path, reason: SkipReason) {
    match reason {
        SkipReason::CurrentDir => {
            println!("Not removing current working directory: {}", path.display())
        }
        SkipReason::ContainsCurrentDir => println!(
            "Not removing parent of current working directory: {}",
            path.display()
        ),
        SkipReason::ContainsKeptRoot => {
            println!("Not removing parent of kept root: {}", path.display())
        }
    }
}
