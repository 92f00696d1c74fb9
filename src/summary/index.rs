//! Category label index over the summary sections.
//!
//! The console prints recognizable category headers ("Password Policy",
//! "Clustering", ...) at variable positions. A single indexing pass records
//! the section offset of each recognized label; the map is read-only
//! afterwards. Duplicate headers occasionally appear in real dumps, and the
//! last occurrence wins.

use std::collections::HashMap;

use crate::error::{HealthCheckError, Result};
use crate::summary::structured::Section;

/// Category labels the index recognizes.
pub const CATEGORY_LABELS: [&str; 10] = [
    "Password Policy",
    "Clustering",
    "Activation Code",
    "Change Management",
    "Apache Tomcat Settings",
    "Log Flushing",
    "Push Certificates",
    "Check-In",
    "Table sizes",
    "Table row counts",
];

/// Immutable label → section-offset map plus bounds-checked cell access.
#[derive(Debug)]
pub struct SummaryIndex {
    sections: Vec<Section>,
    offsets: HashMap<&'static str, usize>,
}

impl SummaryIndex {
    /// Scans every section's label and records recognized categories.
    pub fn build(sections: Vec<Section>) -> Self {
        let mut offsets = HashMap::new();
        for (offset, section) in sections.iter().enumerate() {
            if let Some(label) = section.label() {
                if let Some(known) = CATEGORY_LABELS.iter().find(|l| **l == label) {
                    // Last occurrence wins.
                    offsets.insert(*known, offset);
                }
            }
        }
        SummaryIndex { sections, offsets }
    }

    /// Section offset of a category label, or `None` when the label never
    /// appeared. `None` is distinct from offset zero on purpose.
    pub fn lookup(&self, label: &str) -> Option<usize> {
        self.offsets.get(label).copied()
    }

    /// Like [`lookup`](Self::lookup) but as a recoverable error.
    pub fn require(&self, label: &str) -> Result<usize> {
        self.lookup(label)
            .ok_or_else(|| HealthCheckError::missing(format!("summary category {label:?}")))
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Bounds-checked cell access. Out-of-range coordinates are a
    /// recoverable [`HealthCheckError::MissingField`], never a panic.
    pub fn value_at(&self, section: usize, row: usize, cell: usize) -> Result<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.rows.get(row))
            .and_then(|r| r.cells.get(cell))
            .map(String::as_str)
            .ok_or_else(|| {
                HealthCheckError::missing(format!("section {section} row {row} cell {cell}"))
            })
    }

    /// Whole row re-joined with tabs, for row-scanning extractors.
    pub fn row_text(&self, section: usize, row: usize) -> Result<String> {
        self.sections
            .get(section)
            .and_then(|s| s.rows.get(row))
            .map(|r| r.text())
            .ok_or_else(|| HealthCheckError::missing(format!("section {section} row {row}")))
    }

    /// Cells of one row, for extractors that need per-cell token counts.
    pub fn row_cells(&self, section: usize, row: usize) -> Result<&[String]> {
        self.sections
            .get(section)
            .and_then(|s| s.rows.get(row))
            .map(|r| r.cells.as_slice())
            .ok_or_else(|| HealthCheckError::missing(format!("section {section} row {row}")))
    }
}
