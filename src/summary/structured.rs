//! Generic sectioned-text splitter.
//!
//! Splits a blob on a literal section delimiter, each section on a literal
//! row delimiter, and each row on tabs. Empty trailing sections and rows are
//! preserved: downstream index arithmetic (`label section + 1` style access)
//! depends on their presence.

use crate::error::{HealthCheckError, Result};

/// The 90-character `=` rule between summary sections.
pub const SECTION_RULE: &str =
    "==========================================================================================";

/// The 84-character `-` rule between rows within a section.
pub const ROW_RULE: &str =
    "------------------------------------------------------------------------------------";

/// Cells within a row are tab-delimited.
pub const CELL_DELIMITER: char = '\t';

/// One row of a section: an ordered list of tab-delimited cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    /// The row re-joined with tabs, for extractors that scan whole rows.
    pub fn text(&self) -> String {
        self.cells.join("\t")
    }
}

/// One section: an ordered list of rows, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub rows: Vec<Row>,
}

impl Section {
    /// First cell of the first row, trimmed. This is where the console
    /// prints the section's category label.
    pub fn label(&self) -> Option<&str> {
        self.rows
            .first()
            .and_then(|row| row.cells.first())
            .map(|cell| cell.trim())
    }
}

/// Splits a summary blob using the console's fixed delimiters.
pub fn split(blob: &str) -> Result<Vec<Section>> {
    split_with(blob, SECTION_RULE, ROW_RULE)
}

/// Splits `blob` on `section_delimiter`, then each section on
/// `row_delimiter`, then each row on tabs.
///
/// Fails with [`HealthCheckError::MalformedInput`] only when the blob is
/// empty; absent content within a well-formed blob is a downstream concern.
pub fn split_with(blob: &str, section_delimiter: &str, row_delimiter: &str) -> Result<Vec<Section>> {
    if blob.trim().is_empty() {
        return Err(HealthCheckError::MalformedInput);
    }

    Ok(blob
        .split(section_delimiter)
        .map(|chunk| Section {
            rows: chunk
                .split(row_delimiter)
                .map(|row| Row {
                    cells: row.split(CELL_DELIMITER).map(str::to_owned).collect(),
                })
                .collect(),
        })
        .collect())
}
