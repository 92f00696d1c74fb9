//! Smart-group extraction and nesting analysis.

use tracing::debug;

use crate::extract::slots::{group_slots, GroupKind};
use crate::record::Record;

/// Substrings in a criterion entry that mark a nested-group reference.
pub const NESTED_GROUP_MARKERS: [&str; 3] =
    ["Computer Group", "Mobile Device Group", "User Group"];

/// Facts about one smart group. Absent slots stay `None`; the siblings are
/// still extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupFacts {
    pub id: Option<String>,
    pub name: Option<String>,
    pub criteria_count: Option<u32>,
    pub nested_count: u32,
}

impl GroupFacts {
    /// A group warrants attention when it nests other groups or its
    /// criteria count exceeds the configured threshold.
    pub fn flagged(&self, criteria_threshold: u32) -> bool {
        self.nested_count > 0 || self.criteria_count.unwrap_or(0) > criteria_threshold
    }
}

/// Extracts group facts from one record using the slot table for `kind`.
pub fn extract_group(kind: GroupKind, record: &Record) -> GroupFacts {
    let slots = group_slots(kind);

    let id = record.value_at(slots.id, 0).map(str::to_owned).ok();
    let name = record.value_at(slots.name, 0).map(str::to_owned).ok();

    let criteria_count = match record.value_at(slots.criteria, 0) {
        Ok(raw) => raw.parse::<u32>().ok(),
        Err(err) => {
            debug!(kind = kind.api_name(), %err, "criteria slot absent");
            None
        }
    };

    let nested_count = record
        .field(slots.criteria)
        .map(|field| {
            field
                .values
                .iter()
                .skip(1)
                .filter(|value| NESTED_GROUP_MARKERS.iter().any(|m| value.contains(m)))
                .count() as u32
        })
        .unwrap_or(0);

    GroupFacts {
        id,
        name,
        criteria_count,
        nested_count,
    }
}
