use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// 输出展示配置，由调用方持有，生成器只读取其中的字段
#[derive(Debug, Clone)]
pub struct PresentationConfig {
    /// Markdown 输出开头的文本
    pub header: Option<String>,

    /// Markdown 输出结尾的文本
    pub footer: Option<String>,

    /// 输出文件所在目录
    pub output_directory: PathBuf,

    /// 写入 TOON 头部的生成时间
    pub generated_at: DateTime<Utc>,
}

impl PresentationConfig {
    /// 创建不带头尾注释的展示配置
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            header: None,
            footer: None,
            output_directory: output_directory.into(),
            generated_at: Utc::now(),
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into()).filter(|h: &String| !h.is_empty());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into()).filter(|f: &String| !f.is_empty());
        self
    }

    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self::new(crate::config::defaults::DEFAULT_OUTPUT_DIR)
    }
}
