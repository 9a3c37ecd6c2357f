use std::path::Path;

use crate::error::ContextError;
use crate::models::{FileRecord, ScanResult, ScanWarning};
use crate::scanner::file_walker::CandidateFile;
use crate::scanner::text_classifier;

/// 记录聚合器 - 读取候选文件内容，生成文件记录并累计统计
pub struct RecordAggregator {
    result: ScanResult,
}

impl RecordAggregator {
    /// 创建新的聚合器
    pub fn new(root: &Path) -> Self {
        Self {
            result: ScanResult::new(root.display().to_string()),
        }
    }

    /// 读取所有候选文件并返回排好序的扫描结果
    pub fn aggregate(mut self, candidates: &[CandidateFile]) -> ScanResult {
        for candidate in candidates {
            self.process_file(candidate);
        }

        self.result.finish_scan();
        self.result
    }

    /// 在结果中附加遍历阶段产生的警告
    pub fn with_warnings(mut self, warnings: Vec<ScanWarning>) -> Self {
        self.result.warnings.extend(warnings);
        self
    }

    /// 处理单个文件，读取或解码失败时只记录警告
    fn process_file(&mut self, candidate: &CandidateFile) {
        match read_record(candidate) {
            Ok(record) => self.result.add_record(record),
            Err(err) => {
                tracing::warn!("跳过文件: {}", err);
                self.result
                    .add_warning(ScanWarning::new(candidate.relative_path.clone(), &err));
            }
        }
    }
}

/// 读取文件内容并构建记录
fn read_record(candidate: &CandidateFile) -> Result<FileRecord, ContextError> {
    let bytes = std::fs::read(&candidate.full_path).map_err(|source| ContextError::FileUnreadable {
        path: candidate.relative_path.clone(),
        source,
    })?;

    let content = String::from_utf8(bytes)
        .map_err(|_| ContextError::DecodeFailure(candidate.relative_path.clone()))?;

    Ok(FileRecord::new(
        candidate.relative_path.clone(),
        candidate.name.clone(),
        candidate.extension.clone(),
        text_classifier::language(&candidate.name),
        content,
    ))
}
