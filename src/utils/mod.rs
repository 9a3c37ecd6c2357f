pub mod paths;
pub mod size_format;
pub mod time_format;

pub use paths::{compare_paths, normalize_path, parent_dir};
pub use size_format::{estimate_tokens, format_size};
pub use time_format::format_timestamp;
