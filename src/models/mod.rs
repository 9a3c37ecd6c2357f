pub mod file_record;
pub mod presentation;
pub mod scan_result;

pub use file_record::{count_lines, FileRecord, OTHER_EXTENSION};
pub use presentation::PresentationConfig;
pub use scan_result::{ScanResult, ScanStats, ScanWarning};
