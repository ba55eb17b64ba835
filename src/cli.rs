//! CLI argument parser for prune-empty
//!
//! Provides type-safe argument parsing using clap derive.

use crate::config::PruneConfig;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::{Path, PathBuf};

/// CLI arguments for prune-empty
#[derive(Parser, Debug)]
#[command(
    name = "prune-empty",
    version,
    about = "Remove empty files and empty directories",
    long_about = "Removes every zero-byte file under the given directories and every directory\n\
                  that contains nothing once those files and its removable subdirectories are gone.\n\
                  The given directories themselves are kept unless --remove-empty-roots is set.\n\
                  The current working directory is never removed."
)]
pub struct CliArgs {
    /// Directories to prune (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Dry run mode (report what would be removed without removing anything)
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Keep zero-byte files (directories containing any file are kept)
    #[arg(short = 'f', long)]
    pub keep_empty_files: bool,

    /// Also remove the given directories if they end up empty
    #[arg(long)]
    pub remove_empty_roots: bool,

    /// Do not print a line for each removed item
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Parse CLI arguments from command line
    ///
    /// Help and version requests come back as errors too; see [`usage_exit_code`].
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Build the run configuration, resolving relative paths against `cwd`.
    ///
    /// Without a working directory relative paths are only cleaned.
    pub fn into_config(self, cwd: Option<&Path>) -> PruneConfig {
        PruneConfig::new(cwd.unwrap_or_else(|| Path::new("")), &self.paths)
            .with_dry_run(self.dry_run)
            .with_keep_empty_files(self.keep_empty_files)
            .with_remove_empty_roots(self.remove_empty_roots)
            .with_quiet(self.quiet)
    }
}

/// 終了コード: --help / --version は 0、使い方の誤りは 1
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("prune-empty").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_no_paths() {
        let args = parse(&[]);
        assert!(args.paths.is_empty());
        assert!(!args.dry_run);
        assert!(!args.keep_empty_files);
        assert!(!args.remove_empty_roots);
        assert!(!args.quiet);
    }

    #[test]
    fn test_multiple_paths() {
        let args = parse(&["a", "b/c", "/abs"]);
        assert_eq!(args.paths.len(), 3);
        assert_eq!(args.paths[1], PathBuf::from("b/c"));
    }

    #[test]
    fn test_long_flags() {
        let args = parse(&[
            "--dry-run",
            "--keep-empty-files",
            "--remove-empty-roots",
            "--quiet",
            "dir",
        ]);
        assert!(args.dry_run);
        assert!(args.keep_empty_files);
        assert!(args.remove_empty_roots);
        assert!(args.quiet);
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["-f", "-q", "-n", "dir"]);
        assert!(args.keep_empty_files);
        assert!(args.quiet);
        assert!(args.dry_run);
        assert!(!args.remove_empty_roots);
    }

    #[test]
    fn test_help_is_display_help() {
        let err = CliArgs::try_parse_from(["prune-empty", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_unknown_flag_is_error() {
        let err = CliArgs::try_parse_from(["prune-empty", "--recursive"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), 1);
    }

    #[test]
    fn test_help_and_version_exit_0() {
        let help = CliArgs::try_parse_from(["prune-empty", "-h"]).unwrap_err();
        assert_eq!(usage_exit_code(&help), 0);
        let version = CliArgs::try_parse_from(["prune-empty", "--version"]).unwrap_err();
        assert_eq!(usage_exit_code(&version), 0);
    }

    #[test]
    fn test_into_config() {
        let config =
            parse(&["-f", "--remove-empty-roots", "a", "./a"]).into_config(Some(Path::new("/w")));
        assert_eq!(config.roots, vec![PathBuf::from("/w/a")]);
        assert!(config.keep_empty_files);
        assert!(config.remove_empty_roots);
        assert!(!config.dry_run);
        assert!(!config.quiet);
    }

    #[test]
    fn test_into_config_defaults_to_cwd() {
        let config = parse(&[]).into_config(Some(Path::new("/w")));
        assert_eq!(config.roots, vec![PathBuf::from("/w")]);
    }

    #[test]
    fn test_into_config_without_cwd() {
        let config = parse(&["a/./b", "/abs/x/"]).into_config(None);
        assert_eq!(
            config.roots,
            vec![PathBuf::from("a/b"), PathBuf::from("/abs/x")]
        );
    }
}
