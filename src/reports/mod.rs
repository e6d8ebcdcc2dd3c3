//! Report generation modules for different output formats
//!
//! Reports summarize the notices a session produced:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::core::Notice;
use crate::error::GraphAnalyzerError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from the notices of a session, in the order they
    /// were raised
    fn generate_report(&self, notices: &[Notice]) -> Result<String, GraphAnalyzerError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
