use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 扫描进度的展示方式，仅由命令行层注入使用
pub trait ProgressReporter {
    /// 开始一个阶段
    fn start(&self, message: &str);

    /// 阶段成功结束
    fn succeed(&self, message: &str);

    /// 阶段失败结束
    fn fail(&self, message: &str);
}

/// 基于 indicatif 的终端旋转指示器
pub struct SpinnerProgress {
    bar: ProgressBar,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            bar: create_spinner(),
        }
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for SpinnerProgress {
    fn start(&self, message: &str) {
        self.bar.set_message(message.to_string());
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn succeed(&self, message: &str) {
        self.bar.finish_with_message(format!("✔ {}", message));
    }

    fn fail(&self, message: &str) {
        self.bar.abandon_with_message(format!("✖ {}", message));
    }
}

/// 不输出任何内容的进度报告器
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn start(&self, _message: &str) {}

    fn succeed(&self, _message: &str) {}

    fn fail(&self, _message: &str) {}
}

/// 创建旋转指示器（在测试时隐藏）
fn create_spinner() -> ProgressBar {
    if cfg!(test) {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔"]));
    }
    pb
}
