use std::collections::BTreeSet;

use crate::models::{FileRecord, PresentationConfig};
use crate::output::ensure_trailing_newline;
use crate::utils::parent_dir;

/// 生成 Markdown：可选开头注释、目录结构摘要、逐个文件的代码块、可选结尾注释
pub fn to_markdown(records: &[FileRecord], presentation: &PresentationConfig) -> String {
    let mut output = String::new();

    if let Some(header) = presentation.header.as_deref().filter(|h| !h.is_empty()) {
        output.push_str(header);
        output.push_str("\n\n");
    }

    // 项目结构
    output.push_str("## Project Structure\n\n```\n");
    let dirs: BTreeSet<&str> = records.iter().filter_map(|r| parent_dir(&r.path)).collect();
    for dir in dirs {
        output.push_str(&format!("📁 {}/\n", dir));
    }
    output.push_str(&format!("\n{} files total\n```\n\n", records.len()));

    // 源文件
    output.push_str("## Source Files\n\n");
    for record in records {
        output.push_str(&format!("### {}\n\n", record.path));
        output.push_str(&format!("```{}\n", record.language));
        output.push_str(&record.content);
        output.push_str(ensure_trailing_newline(&record.content));
        output.push_str("```\n\n");
    }

    if let Some(footer) = presentation.footer.as_deref().filter(|f| !f.is_empty()) {
        output.push_str(footer);
    }

    output
}
