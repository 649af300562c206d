pub mod analysis_service;
pub mod classifier;
pub mod record_parser;
pub mod report_writer;

pub use analysis_service::{analyze, Analysis};
pub use record_parser::{parse_courses, parse_line};
pub use report_writer::ReportWriter;
