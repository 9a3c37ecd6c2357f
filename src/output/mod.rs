pub mod json;
pub mod markdown;
pub mod toon;
pub mod xml;

use std::fmt;
use std::str::FromStr;

use crate::error::{ContextError, Result};
use crate::models::{FileRecord, PresentationConfig, ScanStats};

/// 支持的输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Json,
    Markdown,
    Toon,
    Xml,
}

impl OutputFormat {
    /// 全部格式，按保存顺序排列
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Toon,
        OutputFormat::Xml,
    ];

    /// 输出文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
            OutputFormat::Toon => "toon",
            OutputFormat::Xml => "xml",
        }
    }

    /// 渲染记录集
    pub fn render(
        &self,
        records: &[FileRecord],
        stats: &ScanStats,
        presentation: &PresentationConfig,
    ) -> Result<String> {
        match self {
            OutputFormat::Json => json::to_json(records),
            OutputFormat::Markdown => Ok(markdown::to_markdown(records, presentation)),
            OutputFormat::Toon => Ok(toon::to_toon(records, stats, presentation)),
            OutputFormat::Xml => Ok(xml::to_xml(records)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "toon" => Ok(OutputFormat::Toon),
            "xml" => Ok(OutputFormat::Xml),
            _ => Err(ContextError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// 按格式名渲染记录集，未知格式返回 `UnsupportedFormat`
pub fn render(
    format: &str,
    records: &[FileRecord],
    stats: &ScanStats,
    presentation: &PresentationConfig,
) -> Result<String> {
    format.parse::<OutputFormat>()?.render(records, stats, presentation)
}

/// 确保文本以换行结尾
pub(crate) fn ensure_trailing_newline(content: &str) -> &'static str {
    if content.ends_with('\n') {
        ""
    } else {
        "\n"
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_parse_format_names() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("MD".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("toon".parse::<OutputFormat>().unwrap(), OutputFormat::Toon);
        assert_eq!("xml".parse::<OutputFormat>().unwrap(), OutputFormat::Xml);
    }

    #[test]
    fn test_render_unknown_format() {
        let (records, stats) = sample();
        let err = render("yaml", &records, &stats, &presentation()).unwrap_err();
        assert!(matches!(err, ContextError::UnsupportedFormat(name) if name == "yaml"));
    }

    #[test]
    fn test_all_formats_are_deterministic() {
        let (records, stats) = sample();
        let presentation = presentation();
        for format in OutputFormat::ALL {
            let first = format.render(&records, &stats, &presentation).unwrap();
            let second = format.render(&records, &stats, &presentation).unwrap();
            assert_eq!(first, second, "{} 输出不稳定", format);
        }
    }

    #[test]
    fn test_all_formats_accept_empty_input() {
        let stats = ScanStats::default();
        let presentation = presentation();
        for format in OutputFormat::ALL {
            let output = format.render(&[], &stats, &presentation).unwrap();
            assert!(!output.is_empty());
        }
    }
}
