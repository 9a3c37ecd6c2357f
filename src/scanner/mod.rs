pub mod aggregator;
pub mod file_walker;
pub mod ignore_matcher;
pub mod text_classifier;

pub use aggregator::RecordAggregator;
pub use file_walker::{CandidateFile, FileWalker, WalkOutcome};
pub use ignore_matcher::{parse_ignore_patterns, IgnoreMatcher, IgnoreRule};
pub use text_classifier::{is_text, language};
