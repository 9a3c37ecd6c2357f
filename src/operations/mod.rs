pub mod context_builder;
pub mod progress;

pub use context_builder::{run_scan, run_scan_with, save_context, SavedArtifact};
pub use progress::{ProgressReporter, SilentProgress, SpinnerProgress};
