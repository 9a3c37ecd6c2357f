use crate::models::{FileRecord, PresentationConfig, ScanStats};
use crate::utils::format_timestamp;

/// 表格行的列顺序
const COLUMNS: &str = "path,name,extension,language,lines,size";

/// 生成紧凑表格格式 (TOON)：元数据头、文件表格、逐个文件的缩进内容块
pub fn to_toon(records: &[FileRecord], stats: &ScanStats, presentation: &PresentationConfig) -> String {
    let mut output = String::new();

    // 元数据头
    output.push_str("# Project Context\n");
    output.push_str(&format!("# Generated: {}\n", format_timestamp(&presentation.generated_at)));
    output.push_str(&format!("# Files: {}\n", records.len()));
    output.push_str(&format!("# Lines: {}\n", stats.total_lines));
    output.push_str(&format!("# Size: {} bytes\n\n", stats.total_size));

    // 文件表格
    output.push_str(&format!("files[{}]{{{}}}:\n", records.len(), COLUMNS));
    for record in records {
        output.push_str(&format!(
            "  {},{},{},{},{},{}\n",
            escape_value(&record.path),
            escape_value(&record.name),
            record.extension.as_deref().unwrap_or(""),
            record.language,
            record.lines,
            record.size
        ));
    }
    output.push('\n');

    // 文件内容，每行缩进两个空格
    for (index, record) in records.iter().enumerate() {
        output.push_str("---\n");
        output.push_str(&format!("[{}] {}\n", index, record.path));
        output.push_str(&format!("language: {}\n", record.language));
        output.push_str("content:\n");
        for line in record.content.split('\n') {
            output.push_str("  ");
            output.push_str(line);
            output.push('\n');
        }
    }

    output
}

/// 含逗号、引号、换行或首尾空格的值加引号，内部引号加倍，换行写成字面 `\n`
pub fn escape_value(value: &str) -> String {
    let needs_quotes = value.contains(',')
        || value.contains('\n')
        || value.contains('"')
        || value.starts_with(' ')
        || value.ends_with(' ');

    if !needs_quotes {
        return value.to_string();
    }

    format!("\"{}\"", value.replace('"', "\"\"").replace('\n', "\\n"))
}
