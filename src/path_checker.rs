//! Path normalization for prune-empty
//!
//! Normalizes root paths and compares real paths against the working directory.

use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// パス検証器
pub struct PathChecker;

impl PathChecker {
    /// ルートパスを正規化
    ///
    /// # Arguments
    /// * `base` - 相対パスの基準となる作業ディレクトリ
    /// * `path` - 正規化対象のパス（相対または絶対）
    ///
    /// # Returns
    /// 字句的に正規化された絶対パス（シンボリックリンクは解決しない）
    pub fn normalize_root(base: &Path, path: &Path) -> PathBuf {
        Self::to_absolute(base, path).clean()
    }

    /// 相対パスを絶対パスに変換
    fn to_absolute(base: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }

    /// 可能であれば canonicalize、失敗時は元のパスを返す
    pub fn try_canonicalize(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
    }

    /// パスがルート内に含まれているかチェック
    pub fn is_contained(root: &Path, path: &Path) -> bool {
        // パスがルートと同一か、ルートの子孫である
        path.starts_with(root)
    }
}
