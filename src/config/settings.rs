use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

use crate::config::defaults::{DefaultConfig, CONFIG_FILE, GITIGNORE_ENTRY};
use crate::models::PresentationConfig;
use crate::scanner::IgnoreMatcher;

/// 项目配置，对应 `mkctx.config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// 扫描的根目录
    pub src: String,

    /// 逗号分隔的忽略规则
    pub ignore: String,

    /// 输出目录
    pub output: String,

    /// Markdown 开头注释
    pub first_comment: String,

    /// Markdown 结尾注释
    pub last_comment: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            src: DefaultConfig::default_src(),
            ignore: DefaultConfig::default_ignore(),
            output: DefaultConfig::default_output(),
            first_comment: DefaultConfig::default_first_comment(),
            last_comment: DefaultConfig::default_last_comment(),
        }
    }
}

impl ProjectConfig {
    /// 从文件加载配置，缺失的字段使用默认值
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;

        // 确保目录存在
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// 指定目录下的配置文件路径
    pub fn config_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// 加载目录中的配置文件；文件不存在时返回 None，解析失败时退回默认配置
    pub fn load_from_dir(dir: &Path) -> Option<Self> {
        let path = Self::config_path(dir);
        if !path.exists() {
            return None;
        }

        match Self::load_from_file(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("配置文件解析失败，使用默认配置: {:#}", err);
                Some(Self::default())
            }
        }
    }

    /// 在目录中创建默认配置文件、输出目录，并把输出目录加入 .gitignore
    pub fn create_default_in(dir: &Path) -> Result<Self> {
        let config = Self::default();

        std::fs::create_dir_all(dir.join(GITIGNORE_ENTRY.trim_end_matches('/')))?;
        config.save_to_file(&Self::config_path(dir))?;
        update_gitignore(dir)?;

        Ok(config)
    }

    /// 将忽略规则解析为匹配器
    pub fn ignore_matcher(&self) -> crate::error::Result<IgnoreMatcher> {
        IgnoreMatcher::parse(&self.ignore)
    }

    /// 由配置得到输出展示配置
    pub fn presentation(&self) -> PresentationConfig {
        PresentationConfig::new(&self.output)
            .with_header(self.first_comment.clone())
            .with_footer(self.last_comment.clone())
    }
}

/// 确保 .gitignore 中包含输出目录，已存在时不重复添加
pub fn update_gitignore(dir: &Path) -> Result<bool> {
    let gitignore_path = dir.join(".gitignore");
    let mut content = if gitignore_path.exists() {
        std::fs::read_to_string(&gitignore_path)?
    } else {
        String::new()
    };

    if content.contains(GITIGNORE_ENTRY) {
        return Ok(false);
    }

    content.push_str("\n# mkctx - generated context\n");
    content.push_str(GITIGNORE_ENTRY);
    content.push('\n');
    std::fs::write(&gitignore_path, content)?;
    Ok(true)
}
