use crate::models::FileRecord;
use crate::output::ensure_trailing_newline;

/// 生成 XML：`<context>` 根元素下每个文件一个 `<file>`，内容放在 CDATA 中
pub fn to_xml(records: &[FileRecord]) -> String {
    let mut output = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    output.push_str("<context>\n");

    for record in records {
        output.push_str("  <file>\n");
        output.push_str(&format!("    <path>{}</path>\n", escape_xml(&record.path)));
        output.push_str(&format!("    <name>{}</name>\n", escape_xml(&record.name)));
        output.push_str(&format!(
            "    <extension>{}</extension>\n",
            escape_xml(record.extension.as_deref().unwrap_or(""))
        ));
        output.push_str(&format!("    <language>{}</language>\n", escape_xml(&record.language)));
        output.push_str(&format!("    <lines>{}</lines>\n", record.lines));
        output.push_str(&format!("    <size>{}</size>\n", record.size));
        output.push_str(&format!(
            "    <content><![CDATA[\n{}{}]]></content>\n",
            escape_cdata(&record.content),
            ensure_trailing_newline(&record.content)
        ));
        output.push_str("  </file>\n");
    }

    output.push_str("</context>\n");
    output
}

/// 将内容中的 `]]>` 拆到两个相邻的 CDATA 段中，避免提前结束 CDATA
pub fn escape_cdata(content: &str) -> String {
    content.replace("]]>", "]]]]><![CDATA[>")
}

/// 转义 XML 文本中的五个预定义实体
pub fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::record;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c\"'d'"), "a&lt;b&gt;&amp;&quot;c&quot;&apos;d&apos;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_xml_layout() {
        let records = vec![record("docs/R&D.md", "markdown", "# <Title>")];
        let output = to_xml(&records);

        let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<context>\n\
\x20 <file>\n\
\x20   <path>docs/R&amp;D.md</path>\n\
\x20   <name>R&amp;D.md</name>\n\
\x20   <extension>md</extension>\n\
\x20   <language>markdown</language>\n\
\x20   <lines>1</lines>\n\
\x20   <size>9</size>\n\
\x20   <content><![CDATA[\n# <Title>\n]]></content>\n\
\x20 </file>\n\
</context>\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_content_with_trailing_newline_is_not_doubled() {
        let output = to_xml(&[record("Makefile", "makefile", "all:\n")]);
        assert!(output.contains("<extension></extension>"));
        assert!(output.contains("<![CDATA[\nall:\n]]>"));
    }

    #[test]
    fn test_cdata_terminator_in_content_stays_inside_content() {
        let output = to_xml(&[record("src/cdata.ts", "typescript", "const s = \"]]>\";")]);

        assert!(output.contains(
            "<content><![CDATA[\nconst s = \"]]]]><![CDATA[>\";\n]]></content>"
        ));
        assert_eq!(output.matches("<content>").count(), 1);
        assert_eq!(output.matches("</content>").count(), 1);

        // 拼接所有 CDATA 段后得到原始内容
        let start = output.find("<content>").unwrap() + "<content>".len();
        let end = output.find("</content>").unwrap();
        let text: String = output[start..end]
            .split("]]><![CDATA[")
            .collect::<Vec<_>>()
            .concat()
            .trim_start_matches("<![CDATA[")
            .trim_end_matches("]]>")
            .to_string();
        assert_eq!(text, "\nconst s = \"]]>\";\n");
    }

    #[test]
    fn test_empty_root() {
        assert_eq!(
            to_xml(&[]),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<context>\n</context>\n"
        );
    }
}
