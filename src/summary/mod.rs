//! Parsing of the console's plaintext summary dump.
//!
//! The summary page is not a structured document: its shape is implied by a
//! 90-character `=` rule between sections, an 84-character `-` rule between
//! rows, and tabs between cells. [`structured`] turns the blob into an
//! addressable table, [`index`] locates the variable-position sections by
//! their category labels, and [`fields`] pulls typed facts out of the cells.

pub mod fields;
pub mod index;
pub mod structured;

pub use fields::{
    keyed_substring, large_table_list, row_counts, size_with_unit, ConsoleSummary, LargeTable,
    TableRowCounts,
};
pub use index::SummaryIndex;
pub use structured::{split, split_with, Row, Section};
