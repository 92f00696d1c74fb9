//! Script body inspection.

use crate::extract::slots::SCRIPT_SLOTS;
use crate::record::Record;

/// Lower-case snippets that mark a script as needing an update: the old
/// binary location and blunt maintenance commands.
pub const RED_FLAG_SNIPPETS: [&str; 3] = ["/usr/sbin/jamf", "rm -rf", "jamf recon"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFacts {
    pub name: Option<String>,
    pub body: Option<String>,
}

impl ScriptFacts {
    pub fn flagged(&self) -> bool {
        match &self.body {
            Some(body) => {
                let lowered = body.to_lowercase();
                RED_FLAG_SNIPPETS.iter().any(|s| lowered.contains(s))
            }
            None => false,
        }
    }
}

pub fn extract_script(record: &Record) -> ScriptFacts {
    ScriptFacts {
        name: record.value_at(SCRIPT_SLOTS.name, 0).map(str::to_owned).ok(),
        body: record.value_at(SCRIPT_SLOTS.body, 0).map(str::to_owned).ok(),
    }
}
