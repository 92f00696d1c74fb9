//! Per-object-kind extraction rules.
//!
//! Each remote object kind has its own positional layout; the slot tables
//! in [`slots`] are the single place those positions live. Extractors take
//! a parsed [`crate::record::Record`] and produce typed facts, degrading to
//! absent options when a record is shorter than expected.

pub mod accounts;
pub mod groups;
pub mod policies;
pub mod printers;
pub mod scripts;
pub mod slots;

pub use accounts::{extract_ldap_server, extract_vpp_account, LdapServerFacts, VppAccountFacts};
pub use groups::{extract_group, GroupFacts};
pub use policies::{extract_policy, PolicyFacts};
pub use printers::{extract_printer, PrinterFacts};
pub use scripts::{extract_script, ScriptFacts};
pub use slots::GroupKind;
