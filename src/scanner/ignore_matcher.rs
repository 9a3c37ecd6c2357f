use regex::{Regex, RegexBuilder};

use crate::config::SYSTEM_EXCLUSIONS;
use crate::error::{ContextError, Result};
use crate::utils::normalize_path;

/// 一条解析后的忽略规则
#[derive(Debug, Clone)]
pub enum IgnoreRule {
    /// 与相对路径或文件名完全相等
    Exact(String),

    /// 以 `/` 结尾的目录规则，保存时去掉结尾的 `/`
    Directory(String),

    /// 含 `*` 的通配符规则，解析时编译一次
    Wildcard {
        pattern: String,
        regex: Regex,
        /// 规则以 `/` 结尾时同样匹配祖先目录
        trailing_slash: bool,
    },
}

/// 忽略规则匹配器：系统排除项优先，其次按顺序检查用户规则
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    rules: Vec<IgnoreRule>,
}

/// 拆分逗号分隔的规则串，去掉空白和空项
pub fn parse_ignore_patterns(patterns: &str) -> Vec<String> {
    patterns
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

impl IgnoreRule {
    /// 根据规则的形状确定其类型
    pub fn parse(pattern: &str) -> Result<Self> {
        let pattern = normalize_path(pattern);

        if pattern.contains('*') {
            let trailing_slash = pattern.ends_with('/');
            let stem = pattern.trim_end_matches('/');
            let regex = compile_wildcard(stem).map_err(|source| ContextError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            return Ok(IgnoreRule::Wildcard {
                pattern,
                regex,
                trailing_slash,
            });
        }

        if let Some(dir) = pattern.strip_suffix('/') {
            return Ok(IgnoreRule::Directory(dir.to_string()));
        }

        Ok(IgnoreRule::Exact(pattern))
    }

    /// 规则原文
    pub fn pattern(&self) -> String {
        match self {
            IgnoreRule::Exact(p) => p.clone(),
            IgnoreRule::Directory(d) => format!("{}/", d),
            IgnoreRule::Wildcard { pattern, .. } => pattern.clone(),
        }
    }

    /// 检查条目是否命中此规则
    pub fn matches(&self, name: &str, relative_path: &str) -> bool {
        match self {
            IgnoreRule::Wildcard {
                pattern,
                regex,
                trailing_slash,
            } => {
                if regex.is_match(name) || regex.is_match(relative_path) {
                    return true;
                }
                if *trailing_slash {
                    if ancestors(relative_path).any(|dir| regex.is_match(dir)) {
                        return true;
                    }
                    // 目录名中字面的 `*` 也按目录规则处理
                    let dir = pattern.trim_end_matches('/');
                    return contains_segment(relative_path, dir) || name == dir;
                }
                false
            }
            IgnoreRule::Directory(dir) => contains_segment(relative_path, dir) || name == dir,
            IgnoreRule::Exact(p) => relative_path == p || name == p,
        }
    }
}

impl IgnoreMatcher {
    /// 从逗号分隔的规则串解析匹配器
    pub fn parse(patterns: &str) -> Result<Self> {
        let rules = parse_ignore_patterns(patterns)
            .iter()
            .map(|p| IgnoreRule::parse(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// 只包含系统排除项的匹配器
    pub fn system_only() -> Self {
        Self::default()
    }

    /// 解析后的用户规则（不含系统排除项）
    pub fn rules(&self) -> &[IgnoreRule] {
        &self.rules
    }

    /// 检查条目是否应该被忽略
    ///
    /// `relative_path` 为相对扫描根目录的路径，分隔符会被统一为 `/`。
    pub fn is_ignored(&self, name: &str, relative_path: &str) -> bool {
        let relative_path = normalize_path(relative_path);

        if is_system_excluded(name, &relative_path) {
            return true;
        }

        self.rules
            .iter()
            .any(|rule| rule.matches(name, &relative_path))
    }
}

/// 路径的任意一段或名称本身属于系统排除项
pub fn is_system_excluded(name: &str, relative_path: &str) -> bool {
    SYSTEM_EXCLUSIONS
        .iter()
        .any(|excluded| name == *excluded || contains_segment(relative_path, excluded))
}

/// `dir`（可以包含多段）作为完整路径段出现在路径中
fn contains_segment(relative_path: &str, dir: &str) -> bool {
    if dir.is_empty() {
        return false;
    }
    format!("/{}/", relative_path).contains(&format!("/{}/", dir))
}

/// 依次给出 `a`、`a/b` 这样的祖先目录前缀（不含路径本身）
fn ancestors(relative_path: &str) -> impl Iterator<Item = &str> {
    relative_path
        .match_indices('/')
        .map(move |(index, _)| &relative_path[..index])
}

/// 将通配符编译为忽略大小写的整串匹配正则
///
/// `**/` 匹配零个或多个目录，`**` 可跨越 `/`，`*` 只匹配单个路径段内的字符。
fn compile_wildcard(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    let mut source = String::from("^");
    let mut rest = pattern;

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("**/") {
            source.push_str("(?:.*/)?");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("**") {
            source.push_str(".*");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('*') {
            source.push_str("[^/]*");
            rest = tail;
        } else {
            let end = rest.find('*').unwrap_or(rest.len());
            source.push_str(&regex::escape(&rest[..end]));
            rest = &rest[end..];
        }
    }

    source.push('$');
    RegexBuilder::new(&source).case_insensitive(true).build()
}
