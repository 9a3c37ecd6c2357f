use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{ContextError, Result};
use crate::models::ScanWarning;
use crate::scanner::text_classifier;
use crate::scanner::IgnoreMatcher;
use crate::utils::{compare_paths, normalize_path};

/// 文件遍历器 - 负责深度优先遍历目录并挑选出候选文本文件
pub struct FileWalker<'a> {
    matcher: &'a IgnoreMatcher,
    follow_symlinks: bool,
}

/// 通过忽略规则和文本判断的候选文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// 文件的完整路径
    pub full_path: PathBuf,

    /// 相对扫描根目录的路径（统一使用 `/` 分隔）
    pub relative_path: String,

    /// 文件名
    pub name: String,

    /// 小写扩展名
    pub extension: Option<String>,
}

/// 一次遍历的结果
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome {
    /// 按相对路径排序的候选文件
    pub candidates: Vec<CandidateFile>,

    /// 无法读取而被跳过的目录
    pub warnings: Vec<ScanWarning>,

    /// 被忽略规则剪掉的目录数量
    pub pruned_dirs: usize,
}

impl<'a> FileWalker<'a> {
    /// 创建新的文件遍历器
    pub fn new(matcher: &'a IgnoreMatcher) -> Self {
        Self {
            matcher,
            follow_symlinks: false,
        }
    }

    /// 扫描根目录，返回排好序的候选文件
    ///
    /// 根目录不存在或不是目录时在遍历开始前返回错误；
    /// 遍历中无法列出的目录只记录警告并继续处理其它目录。
    pub fn scan(&self, root: &Path) -> Result<WalkOutcome> {
        if !root.exists() {
            return Err(ContextError::PathNotFound(root.display().to_string()));
        }
        if !root.is_dir() {
            return Err(ContextError::NotADirectory(root.display().to_string()));
        }

        let mut outcome = WalkOutcome::default();
        let mut pruned_dirs = 0usize;

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.follow_symlinks)
            .into_iter()
            .filter_entry(|entry| {
                let ignored = self.is_entry_ignored(root, entry);
                if ignored && entry.file_type().is_dir() {
                    tracing::debug!("跳过目录: {}", entry.path().display());
                    pruned_dirs += 1;
                }
                !ignored
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| root.display().to_string());
                    let error = ContextError::DirectoryUnreadable {
                        path: path.clone(),
                        message: err.to_string(),
                    };
                    tracing::warn!("{}", error);
                    outcome.warnings.push(ScanWarning::new(path, &error));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            if !text_classifier::is_text(&name) {
                continue;
            }

            outcome.candidates.push(CandidateFile {
                full_path: entry.path().to_path_buf(),
                relative_path: relative_path(root, entry.path()),
                extension: text_classifier::extension_of(&name),
                name,
            });
        }

        outcome.pruned_dirs = pruned_dirs;
        outcome
            .candidates
            .sort_by(|a, b| compare_paths(&a.relative_path, &b.relative_path));

        tracing::debug!(
            "遍历完成: {} 个候选文件，跳过 {} 个目录",
            outcome.candidates.len(),
            outcome.pruned_dirs
        );

        Ok(outcome)
    }

    /// 检查遍历到的条目是否应该被忽略
    fn is_entry_ignored(&self, root: &Path, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        let relative = relative_path(root, entry.path());
        self.matcher.is_ignored(&name, &relative)
    }
}

/// 计算相对根目录的路径并统一分隔符
fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    normalize_path(&relative.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use std::fs;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn paths(outcome: &WalkOutcome) -> Vec<&str> {
        outcome
            .candidates
            .iter()
            .map(|c| c.relative_path.as_str())
            .collect()
    }

    #[test]
    fn test_scan_missing_root() {
        let temp_dir = tempdir().unwrap();
        let matcher = IgnoreMatcher::system_only();
        let walker = FileWalker::new(&matcher);

        let err = walker.scan(&temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, ContextError::PathNotFound(_)));
    }

    #[test]
    fn test_scan_file_as_root() {
        let temp_dir = tempdir().unwrap();
        write(temp_dir.path(), "a.ts", "x");
        let matcher = IgnoreMatcher::system_only();

        let err = FileWalker::new(&matcher)
            .scan(&temp_dir.path().join("a.ts"))
            .unwrap_err();
        assert!(matches!(err, ContextError::NotADirectory(_)));
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write(root, "src/b.ts", "b");
        write(root, "src/A.ts", "a");
        write(root, "Cargo.toml", "[package]");
        write(root, "logo.png", "png");
        write(root, "README", "readme");
        write(root, ".git/HEAD", "ref: refs/heads/main");
        write(root, "node_modules/pkg/index.js", "module.exports = {}");

        let matcher = IgnoreMatcher::system_only();
        let outcome = FileWalker::new(&matcher).scan(root).unwrap();

        assert_eq!(paths(&outcome), vec!["Cargo.toml", "src/A.ts", "src/b.ts"]);
        let first = &outcome.candidates[0];
        assert_eq!(first.name, "Cargo.toml");
        assert_eq!(first.extension.as_deref(), Some("toml"));
        assert_eq!(first.full_path, root.join("Cargo.toml"));
        assert!(outcome.pruned_dirs >= 2);
    }

    #[test]
    fn test_ignored_directory_is_not_descended() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write(root, "build/keep.rs", "fn main() {}");
        write(root, "app/build/nested/deep.rs", "fn deep() {}");
        write(root, "app/main.rs", "fn main() {}");

        let matcher = IgnoreMatcher::parse("build/").unwrap();
        let outcome = FileWalker::new(&matcher).scan(root).unwrap();

        assert_eq!(paths(&outcome), vec!["app/main.rs"]);
        assert_eq!(outcome.pruned_dirs, 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_skipped_with_warning() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write(root, "a/one.rs", "fn one() {}");
        write(root, "locked/hidden.rs", "fn hidden() {}");
        write(root, "z.rs", "fn z() {}");

        let locked = root.join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // 有特权的用户仍能读取目录，此时无法构造读取失败
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let matcher = IgnoreMatcher::system_only();
        let outcome = FileWalker::new(&matcher).scan(root);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        let outcome = outcome.unwrap();

        assert_eq!(paths(&outcome), vec!["a/one.rs", "z.rs"]);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].path.ends_with("locked"));
    }
}
