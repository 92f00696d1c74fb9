//! VPP account and LDAP server extraction.
//!
//! These are informational pass-throughs: no flagging logic, just identity
//! and expiration facts for the report.

use chrono::NaiveDate;

use crate::extract::slots::{LDAP_SERVER_SLOTS, VPP_ACCOUNT_SLOTS};
use crate::record::Record;
use crate::util::dates::days_until;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VppAccountFacts {
    pub id: Option<String>,
    pub name: Option<String>,
    pub days_until_expire: Option<i64>,
}

/// Extracts a VPP account. `today` is injected so expiration math is
/// deterministic under test.
pub fn extract_vpp_account(record: &Record, today: NaiveDate) -> VppAccountFacts {
    let slots = VPP_ACCOUNT_SLOTS;

    let days_until_expire = record
        .value_at(slots.expiration, 0)
        .ok()
        .and_then(|expiration| days_until(today, expiration).ok());

    VppAccountFacts {
        id: record.value_at(slots.id, 0).map(str::to_owned).ok(),
        name: record.value_at(slots.name, 0).map(str::to_owned).ok(),
        days_until_expire,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LdapServerFacts {
    pub id: Option<String>,
    pub name: Option<String>,
    pub server_type: Option<String>,
    pub address: Option<String>,
}

pub fn extract_ldap_server(record: &Record) -> LdapServerFacts {
    let slots = LDAP_SERVER_SLOTS;
    let value = |index: usize| {
        record
            .value_at(slots.connection, index)
            .map(str::to_owned)
            .ok()
    };

    LdapServerFacts {
        id: value(slots.id_value),
        name: value(slots.name_value),
        server_type: value(slots.type_value),
        address: value(slots.address_value),
    }
}
