use std::path::{Path, PathBuf};

use crate::error::{ContextError, Result};
use crate::models::{PresentationConfig, ScanResult};
use crate::output::OutputFormat;
use crate::scanner::{FileWalker, IgnoreMatcher, IgnoreRule, RecordAggregator};
use crate::utils::{estimate_tokens, format_size};

/// 已写入磁盘的输出文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArtifact {
    pub format: OutputFormat,
    pub path: PathBuf,
    /// 输出内容的字节数
    pub size: u64,
    /// 估算的 token 数量
    pub tokens: usize,
}

/// 扫描根目录并构建排好序的记录集
///
/// 根目录不存在时返回 `PathNotFound`，没有收录任何文件时返回 `EmptyResult`。
pub fn run_scan(root: &Path, ignore_patterns: &str) -> Result<ScanResult> {
    let matcher = IgnoreMatcher::parse(ignore_patterns)?;
    run_scan_with(root, &matcher)
}

/// 使用已解析的忽略规则扫描
pub fn run_scan_with(root: &Path, matcher: &IgnoreMatcher) -> Result<ScanResult> {
    tracing::debug!(
        "忽略规则 ({}): {}",
        matcher.rules().len(),
        matcher
            .rules()
            .iter()
            .map(IgnoreRule::pattern)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let walk = FileWalker::new(matcher).scan(root)?;

    let result = RecordAggregator::new(root)
        .with_warnings(walk.warnings)
        .aggregate(&walk.candidates);

    if result.is_empty() {
        return Err(ContextError::EmptyResult(root.display().to_string()));
    }

    tracing::info!(
        "扫描完成: {} 个文件, {} 行, {}",
        result.stats.file_count,
        result.stats.total_lines,
        format_size(result.stats.total_size)
    );

    Ok(result)
}

/// 将记录集按选定格式写入输出目录，文件名为 `<base_name>.<扩展名>`
pub fn save_context(
    result: &ScanResult,
    formats: &[OutputFormat],
    presentation: &PresentationConfig,
    base_name: &str,
) -> Result<Vec<SavedArtifact>> {
    let output_dir = &presentation.output_directory;
    std::fs::create_dir_all(output_dir).map_err(|source| ContextError::WriteFailed {
        path: output_dir.display().to_string(),
        source,
    })?;

    let mut saved = Vec::with_capacity(formats.len());
    for format in formats {
        let content = format.render(&result.records, &result.stats, presentation)?;
        let path = output_dir.join(format!("{}.{}", base_name, format.extension()));

        std::fs::write(&path, &content).map_err(|source| ContextError::WriteFailed {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!("已写入: {}", path.display());

        saved.push(SavedArtifact {
            format: *format,
            size: content.len() as u64,
            tokens: estimate_tokens(&content),
            path,
        });
    }

    Ok(saved)
}
