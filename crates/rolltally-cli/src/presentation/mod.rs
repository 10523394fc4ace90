pub mod clipboard;
pub mod json;
pub mod number;
pub mod report;

pub use clipboard::{format_all_participants, format_participant};
pub use report::{ReportOpts, format_report};
