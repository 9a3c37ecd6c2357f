pub mod config;
pub mod error;
pub mod models;
pub mod operations;
pub mod output;
pub mod scanner;
pub mod utils;

// 重新导出常用模块
pub use error::{ContextError, Result};
pub use models::{FileRecord, PresentationConfig, ScanResult, ScanStats};
pub use operations::{run_scan, save_context};
pub use output::{render, OutputFormat};
