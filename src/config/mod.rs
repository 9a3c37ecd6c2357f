pub mod defaults;
pub mod settings;

pub use defaults::{DefaultConfig, CONFIG_FILE, SYSTEM_EXCLUSIONS};
pub use settings::{update_gitignore, ProjectConfig};
