use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mkctx::OutputFormat;

#[derive(Parser)]
#[command(name = "mkctx")]
#[command(about = "将代码库打包为可直接交给大模型的上下文文件")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 配置文件路径（默认读取当前目录下的 mkctx.config.json）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 详细输出
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 不显示进度指示器
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 扫描目录并生成上下文文件（默认命令）
    Generate {
        /// 要扫描的目录路径（默认使用配置中的 src）
        #[arg(short, long)]
        src: Option<String>,

        /// 输出格式，可重复指定
        #[arg(short, long = "format", value_enum, default_value = "all")]
        formats: Vec<FormatArg>,

        /// 输出文件名（不含扩展名）
        #[arg(short, long, default_value = "context")]
        name: String,

        /// 输出目录（默认使用配置中的 output）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 管理配置
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Commands {
    /// 未指定子命令时的默认操作
    pub fn default_generate() -> Self {
        Commands::Generate {
            src: None,
            formats: vec![FormatArg::All],
            name: "context".to_string(),
            output: None,
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// 创建配置文件、输出目录，并更新 .gitignore
    Init,

    /// 显示当前配置
    Show,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    /// 全部格式 (JSON, Markdown, TOON, XML)
    All,
    /// Markdown 格式
    Md,
    /// JSON 格式
    Json,
    /// TOON 紧凑表格格式
    Toon,
    /// XML 格式
    Xml,
}

/// 将命令行选择展开为去重后的输出格式列表
pub fn expand_formats(args: &[FormatArg]) -> Vec<OutputFormat> {
    let mut formats = Vec::new();
    for arg in args {
        let selected: &[OutputFormat] = match arg {
            FormatArg::All => &OutputFormat::ALL,
            FormatArg::Md => &[OutputFormat::Markdown],
            FormatArg::Json => &[OutputFormat::Json],
            FormatArg::Toon => &[OutputFormat::Toon],
            FormatArg::Xml => &[OutputFormat::Xml],
        };
        for format in selected {
            if !formats.contains(format) {
                formats.push(*format);
            }
        }
    }
    formats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_formats() {
        assert_eq!(expand_formats(&[FormatArg::All]), OutputFormat::ALL.to_vec());
        assert_eq!(
            expand_formats(&[FormatArg::Xml, FormatArg::Md, FormatArg::Xml]),
            vec![OutputFormat::Xml, OutputFormat::Markdown]
        );
    }

    #[test]
    fn test_parse_generate_args() {
        let cli = Cli::parse_from(["mkctx", "generate", "-s", "app", "-f", "json", "-f", "toon", "-n", "ctx"]);
        match cli.command {
            Some(Commands::Generate { src, formats, name, output }) => {
                assert_eq!(src.as_deref(), Some("app"));
                assert_eq!(formats, vec![FormatArg::Json, FormatArg::Toon]);
                assert_eq!(name, "ctx");
                assert!(output.is_none());
            }
            _ => panic!("应解析为 generate 子命令"),
        }
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["mkctx", "--quiet"]);
        assert!(cli.command.is_none());
        assert!(cli.quiet);
    }
}
