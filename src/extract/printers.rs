//! Printer driver inspection.

use crate::extract::slots::PRINTER_SLOTS;
use crate::record::Record;

/// Driver vendor whose packages are large enough to warn about.
pub const HEAVY_DRIVER_VENDOR: &str = "xerox";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterFacts {
    pub model: Option<String>,
}

impl PrinterFacts {
    pub fn flagged(&self) -> bool {
        self.model
            .as_deref()
            .map(|m| m.to_lowercase().contains(HEAVY_DRIVER_VENDOR))
            .unwrap_or(false)
    }
}

pub fn extract_printer(record: &Record) -> PrinterFacts {
    PrinterFacts {
        model: record
            .value_at(PRINTER_SLOTS.model, 0)
            .map(str::to_owned)
            .ok(),
    }
}
