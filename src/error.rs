//! Error types for prune-empty
//!
//! Defines PruneError and the action kinds used in removal diagnostics.

use std::fmt;
use std::path::PathBuf;

/// 削除対象の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 空ファイル
    File,
    /// 空ディレクトリ
    Directory,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "empty file"),
            Self::Directory => write!(f, "empty directory"),
        }
    }
}

/// prune-empty のエラー型
#[derive(Debug)]
pub enum PruneError {
    /// ルートが存在しない、またはディレクトリではない
    InvalidRoot {
        path: PathBuf,
        source: Option<std::io::Error>,
    },
    /// ファイルまたはディレクトリの削除に失敗
    RemoveFailed {
        path: PathBuf,
        action: Action,
        source: std::io::Error,
    },
    /// 有効なルートが一つもない
    NoValidRoots,
    /// 一部の処理が失敗
    PartialFailure {
        removed: usize,
        skipped: usize,
        failed: usize,
        invalid_roots: usize,
    },
}

impl PruneError {
    /// 終了コードを取得
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Human readable error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidRoot {
                path,
                source: Some(e),
            } => format!("{}: {}", path.display(), e),
            Self::InvalidRoot { path, source: None } => {
                format!("{}: Not a directory", path.display())
            }
            Self::RemoveFailed {
                path,
                action,
                source,
            } => format!("cannot remove {} '{}': {}", action, path.display(), source),
            Self::NoValidRoots => "no valid directories to process".to_string(),
            Self::PartialFailure {
                removed,
                skipped,
                failed,
                invalid_roots,
            } => format!(
                "{} item(s) removed, {} skipped, {} failed, {} invalid root(s)",
                removed, skipped, failed, invalid_roots
            ),
        }
    }
}

impl fmt::Display for PruneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for PruneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRoot {
                source: Some(e), ..
            } => Some(e),
            Self::RemoveFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
