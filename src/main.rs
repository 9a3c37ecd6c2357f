mod cli;

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use cli::{expand_formats, Cli, Commands, ConfigAction, FormatArg};
use mkctx::config::ProjectConfig;
use mkctx::operations::{run_scan, save_context, ProgressReporter, SilentProgress, SpinnerProgress};
use mkctx::utils::format_size;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志，默认 INFO，--verbose 时为 DEBUG
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir()?;

    // 加载配置
    let config = match &cli.config {
        Some(config_path) => ProjectConfig::load_from_file(config_path)?,
        None => ProjectConfig::load_from_dir(&cwd).unwrap_or_default(),
    };

    let progress: Box<dyn ProgressReporter> = if cli.quiet {
        Box::new(SilentProgress)
    } else {
        Box::new(SpinnerProgress::new())
    };

    // 根据命令执行相应操作
    match cli.command.unwrap_or_else(Commands::default_generate) {
        Commands::Generate { src, formats, name, output } => {
            generate(&config, src, &formats, &name, output, progress.as_ref())?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Init => init_config(&cwd)?,
            ConfigAction::Show => show_config(&cwd, cli.config.as_deref())?,
        },
    }

    Ok(())
}

/// 扫描并保存上下文文件
fn generate(
    config: &ProjectConfig,
    src: Option<String>,
    formats: &[FormatArg],
    name: &str,
    output: Option<PathBuf>,
    progress: &dyn ProgressReporter,
) -> Result<()> {
    let src = src.unwrap_or_else(|| config.src.clone());

    progress.start(&format!("正在扫描 {} ...", src));
    let result = match run_scan(Path::new(&src), &config.ignore) {
        Ok(result) => result,
        Err(err) if err.is_empty_result() => {
            progress.fail(&err.to_string());
            return Ok(());
        }
        Err(err) => {
            progress.fail(&err.to_string());
            return Err(err.into());
        }
    };
    progress.succeed(&format!(
        "上下文构建完成: {} 个文件, {}",
        result.stats.file_count,
        format_size(result.stats.total_size)
    ));

    println!("\n📊 上下文摘要:");
    println!("   文件: {}", result.stats.file_count);
    println!("   行数: {}", result.stats.total_lines);
    println!("   大小: {}", format_size(result.stats.total_size));
    println!("   耗时: {}", result.scan_duration_display());
    if !result.warnings.is_empty() {
        println!("   跳过: {} 个无法读取的条目", result.warnings.len());
    }

    let mut presentation = config.presentation();
    if let Some(output) = output {
        presentation.output_directory = output;
    }

    let saved = save_context(&result, &expand_formats(formats), &presentation, name)?;

    println!("\n✅ 上下文已保存:\n");
    for artifact in &saved {
        println!(
            "   {:<4} → {}",
            artifact.format.extension().to_uppercase(),
            artifact.path.display()
        );
        println!("         {} | ~{} tokens\n", format_size(artifact.size), artifact.tokens);
    }

    Ok(())
}

/// 创建配置文件
fn init_config(cwd: &Path) -> Result<()> {
    if ProjectConfig::config_path(cwd).exists() {
        println!("配置文件已存在: {}", ProjectConfig::config_path(cwd).display());
        return Ok(());
    }

    ProjectConfig::create_default_in(cwd)?;
    println!("\n✅ 已创建配置:");
    println!("   - {}", mkctx::config::CONFIG_FILE);
    println!("   - mkctx/ 目录");
    println!("   - .gitignore 条目\n");
    Ok(())
}

/// 显示当前配置
fn show_config(cwd: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => Some(ProjectConfig::load_from_file(path)?),
        None => ProjectConfig::load_from_dir(cwd),
    };

    match config {
        Some(config) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        None => {
            println!("未找到配置文件，可运行 `mkctx config init` 创建。");
        }
    }
    Ok(())
}
