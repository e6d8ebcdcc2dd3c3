//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::core::Notice;
use crate::error::GraphAnalyzerError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, notices: &[Notice]) -> Result<String, GraphAnalyzerError> {
        let traversals = notices
            .iter()
            .filter(|notice| matches!(notice, Notice::TraversalComplete(_)))
            .count();
        let cycle_checks = notices
            .iter()
            .filter(|notice| matches!(notice, Notice::CycleCheck { .. }))
            .count();

        let report = json!({
            "notices": notices,
            "traversals": traversals,
            "cycle_checks": cycle_checks,
        });

        serde_json::to_string_pretty(&report).map_err(GraphAnalyzerError::Json)
    }
}
