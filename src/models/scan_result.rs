use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::ContextError;
use crate::models::FileRecord;
use crate::utils::compare_paths;

/// 一次扫描的完整结果：排好序的文件记录和统计信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// 按路径排序的文件记录
    pub records: Vec<FileRecord>,

    /// 扫描统计信息
    pub stats: ScanStats,

    /// 被跳过的目录或文件
    pub warnings: Vec<ScanWarning>,

    /// 扫描开始时间
    pub scan_start_time: DateTime<Utc>,

    /// 扫描结束时间
    pub scan_end_time: Option<DateTime<Utc>>,

    /// 扫描的根路径
    pub scanned_root: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// 收录的文件数量
    pub file_count: usize,

    /// 所有文件内容的字节总数
    pub total_size: u64,

    /// 所有文件的行数总和
    pub total_lines: usize,

    /// 按扩展名分组的文件数量，无扩展名归入 "other"
    pub counts_by_extension: BTreeMap<String, usize>,
}

/// 扫描过程中被跳过的条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanWarning {
    pub path: String,
    pub message: String,
}

impl ScanWarning {
    pub fn new(path: impl Into<String>, error: &ContextError) -> Self {
        Self {
            path: path.into(),
            message: error.to_string(),
        }
    }
}

impl ScanStats {
    /// 将一条记录计入统计
    fn record(&mut self, record: &FileRecord) {
        self.file_count += 1;
        self.total_size += record.size;
        self.total_lines += record.lines;
        *self
            .counts_by_extension
            .entry(record.extension_key().to_string())
            .or_insert(0) += 1;
    }

    /// 从记录列表重新计算统计信息
    pub fn from_records(records: &[FileRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.record(record);
        }
        stats
    }
}

impl ScanResult {
    /// 创建新的扫描结果
    pub fn new(scanned_root: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            stats: ScanStats::default(),
            warnings: Vec::new(),
            scan_start_time: Utc::now(),
            scan_end_time: None,
            scanned_root: scanned_root.into(),
        }
    }

    /// 添加文件记录，同时累加统计
    pub fn add_record(&mut self, record: FileRecord) {
        self.stats.record(&record);
        self.records.push(record);
    }

    /// 记录一个被跳过的条目
    pub fn add_warning(&mut self, warning: ScanWarning) {
        self.warnings.push(warning);
    }

    /// 完成扫描：按路径排序记录
    ///
    /// 统计是与顺序无关的累加值，排序后无需重新计算。
    pub fn finish_scan(&mut self) {
        self.records
            .sort_by(|a, b| compare_paths(&a.path, &b.path));
        self.scan_end_time = Some(Utc::now());
    }

    /// 扫描耗时
    pub fn scan_duration(&self) -> Option<Duration> {
        self.scan_end_time.map(|end_time| {
            end_time
                .signed_duration_since(self.scan_start_time)
                .to_std()
                .unwrap_or_default()
        })
    }

    /// 获取扫描耗时的友好显示
    pub fn scan_duration_display(&self) -> String {
        match self.scan_duration() {
            Some(duration) => {
                let millis = duration.as_millis();
                if millis < 1000 {
                    format!("{}ms", millis)
                } else if millis < 60_000 {
                    format!("{:.2}s", duration.as_secs_f64())
                } else {
                    let seconds = duration.as_secs();
                    format!("{}m {}s", seconds / 60, seconds % 60)
                }
            }
            None => "进行中...".to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
