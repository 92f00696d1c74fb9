//! Policy trigger inspection.
//!
//! The combination to catch is a policy that updates inventory, runs
//! ongoing, and fires on every check-in: at fleet scale that floods the
//! database with inventory writes.

use crate::extract::slots::POLICY_SLOTS;
use crate::record::Record;

/// Execution frequency value that marks a recurring policy.
pub const ONGOING_FREQUENCY: &str = "Ongoing";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyFacts {
    pub name: Option<String>,
    pub update_inventory: Option<bool>,
    pub checkin_trigger: Option<bool>,
    pub frequency: Option<String>,
}

impl PolicyFacts {
    pub fn ongoing(&self) -> bool {
        self.frequency.as_deref() == Some(ONGOING_FREQUENCY)
    }

    /// Flagged only when all three conditions hold.
    pub fn flagged(&self) -> bool {
        self.update_inventory == Some(true) && self.ongoing() && self.checkin_trigger == Some(true)
    }
}

pub fn extract_policy(record: &Record) -> PolicyFacts {
    let slots = POLICY_SLOTS;

    let flag_at = |slot: usize, index: usize| -> Option<bool> {
        record.value_at(slot, index).ok().map(|v| v == "true")
    };

    PolicyFacts {
        name: record
            .value_at(slots.general, slots.name_value)
            .map(str::to_owned)
            .ok(),
        update_inventory: flag_at(slots.maintenance, slots.update_inventory_value),
        checkin_trigger: flag_at(slots.general, slots.checkin_trigger_value),
        frequency: record
            .value_at(slots.general, slots.frequency_value)
            .map(str::to_owned)
            .ok(),
    }
}
