use std::cmp::Ordering;

/// 将路径分隔符统一为 `/`
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// 标点与空白的排序位置，与 ICU 根区域的排序一致
const PUNCTUATION_ORDER: &str = "\t\n\r _-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// 单个字符在第一级比较中的权重：空白标点 < 数字 < 字母（忽略大小写）< 其它字符
fn primary_weight(c: char) -> (u8, u32) {
    if let Some(index) = PUNCTUATION_ORDER.find(c) {
        return (0, index as u32);
    }
    if c.is_ascii_digit() {
        return (1, c as u32);
    }
    let lower = c.to_lowercase().next().unwrap_or(c);
    if lower.is_ascii_lowercase() {
        return (2, lower as u32);
    }
    (3, lower as u32)
}

/// 按区域习惯比较两个相对路径
///
/// 先按标点、数字、字母的顺序忽略大小写比较；相同时小写排在大写之前；
/// 最后按原始字符打破平局。
pub fn compare_paths(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight));

    primary
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// 获取相对路径的父目录，位于根目录下的文件返回 None
pub fn parent_dir(path: &str) -> Option<&str> {
    path.rsplit_once('/').map(|(dir, _)| dir).filter(|dir| !dir.is_empty())
}
