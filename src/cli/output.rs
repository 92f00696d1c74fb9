//! Report rendering.
//!
//! JSON output is the report tree exactly as built, pretty-printed; field
//! names and nesting are a stable contract for downstream tooling, so the
//! scored checks ride alongside under a separate key rather than inside the
//! tree. Human output is a short terminal digest.

use anyhow::{Context, Result};

use crate::audit::HealthReport;
use crate::evaluate::HealthStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &HealthReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(report),
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    fn format_json(&self, report: &HealthReport) -> Result<String> {
        let output = serde_json::json!({
            "healthcheck": report.tree.to_json(),
            "checks": report.outcomes,
        });
        serde_json::to_string_pretty(&output).context("Failed to serialize report to JSON")
    }

    fn format_human(&self, report: &HealthReport) -> String {
        let mut lines = Vec::new();

        if let Some(url) = leaf_string(&report.tree, "jss_url") {
            lines.push(format!("Console: {url}"));
        }
        let totals = [
            ("computers", "totalcomputers"),
            ("mobile devices", "totalmobile"),
            ("users", "totalusers"),
        ];
        let counts: Vec<String> = totals
            .iter()
            .filter_map(|(label, key)| {
                leaf_string(&report.tree, key).map(|count| format!("{count} {label}"))
            })
            .collect();
        if !counts.is_empty() {
            lines.push(format!("Inventory: {}", counts.join(", ")));
        }
        lines.push(String::new());

        if report.outcomes.is_empty() {
            lines.push("No checks could be scored.".to_string());
        } else {
            lines.push("Checks:".to_string());
            for outcome in &report.outcomes {
                let marker = match outcome.evaluation.status {
                    HealthStatus::Ok => "ok  ",
                    HealthStatus::Warn => "WARN",
                    HealthStatus::Critical => "CRIT",
                };
                lines.push(format!(
                    "  [{marker}] {}: {}",
                    outcome.check, outcome.evaluation.reason
                ));
            }
        }

        lines.push(String::new());
        lines.join("\n")
    }
}

fn leaf_string(tree: &crate::report::ReportNode, name: &str) -> Option<String> {
    let value = tree.get(name)?.as_leaf()?;
    match value.as_str() {
        Some(text) => Some(text.to_string()),
        None => Some(value.to_string()),
    }
}
