use serde::{Deserialize, Serialize};

/// 单个被收录文件的记录
///
/// 字段顺序即 JSON 输出中的键顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// 相对扫描根目录的路径（统一使用 `/` 分隔）
    pub path: String,

    /// 文件名（包含扩展名）
    pub name: String,

    /// 小写扩展名，不含前导 `.`
    pub extension: Option<String>,

    /// 代码块语言标签
    pub language: String,

    /// 按 `\n` 切分得到的行数
    pub lines: usize,

    /// 内容的 UTF-8 字节长度
    pub size: u64,

    /// 文件的完整文本内容
    pub content: String,
}

impl FileRecord {
    /// 从已读取的内容构建记录，行数与大小都由内容本身计算
    pub fn new(
        path: String,
        name: String,
        extension: Option<String>,
        language: String,
        content: String,
    ) -> Self {
        Self {
            lines: count_lines(&content),
            size: content.len() as u64,
            path,
            name,
            extension,
            language,
            content,
        }
    }

    /// 统计直方图中使用的扩展名键
    pub fn extension_key(&self) -> &str {
        self.extension.as_deref().unwrap_or(OTHER_EXTENSION)
    }
}

/// 没有扩展名的文件在统计中归入的键
pub const OTHER_EXTENSION: &str = "other";

/// 按 `\n` 切分后的段数，空内容也算一行
pub fn count_lines(content: &str) -> usize {
    content.split('\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content: &str) -> FileRecord {
        FileRecord::new(
            "src/a.ts".to_string(),
            "a.ts".to_string(),
            Some("ts".to_string()),
            "typescript".to_string(),
            content.to_string(),
        )
    }

    #[test]
    fn test_count_lines_edge_cases() {
        assert_eq!(count_lines(""), 1);
        assert_eq!(count_lines("\n"), 2);
        assert_eq!(count_lines("a\nb"), 2);
        assert_eq!(count_lines("a\nb\n"), 3);
    }

    #[test]
    fn test_size_is_utf8_byte_length() {
        let rec = record("héllo");
        assert_eq!(rec.size, 6);
        assert_eq!(rec.lines, 1);
    }

    #[test]
    fn test_extension_key_falls_back_to_other() {
        let mut rec = record("x");
        assert_eq!(rec.extension_key(), "ts");
        rec.extension = None;
        assert_eq!(rec.extension_key(), "other");
    }
}
