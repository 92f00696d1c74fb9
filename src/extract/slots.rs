//! Positional slot tables, one per object kind.
//!
//! Child order is the only schema the API gives us, and the interesting
//! slot differs per object kind. Keeping every literal index in this one
//! table makes the fragility visible and testable instead of scattering it
//! through the extraction logic. All values were verified empirically
//! against live consoles and should be re-verified after a server upgrade.

/// The three smart-group flavors. Same concept, three layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Computer,
    MobileDevice,
    User,
}

impl GroupKind {
    pub const ALL: [GroupKind; 3] = [
        GroupKind::Computer,
        GroupKind::MobileDevice,
        GroupKind::User,
    ];

    /// API collection name, also the report key for this kind.
    pub fn api_name(&self) -> &'static str {
        match self {
            GroupKind::Computer => "computergroups",
            GroupKind::MobileDevice => "mobiledevicegroups",
            GroupKind::User => "usergroups",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GroupSlots {
    pub id: usize,
    pub name: usize,
    /// Slot of the criteria field: value 0 is the criteria count, the
    /// remaining values are the criterion entries.
    pub criteria: usize,
}

/// The criteria slot genuinely differs by group kind.
pub const fn group_slots(kind: GroupKind) -> GroupSlots {
    match kind {
        GroupKind::Computer => GroupSlots {
            id: 0,
            name: 1,
            criteria: 4,
        },
        GroupKind::MobileDevice => GroupSlots {
            id: 0,
            name: 1,
            criteria: 3,
        },
        GroupKind::User => GroupSlots {
            id: 0,
            name: 1,
            criteria: 5,
        },
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScriptSlots {
    pub name: usize,
    pub body: usize,
}

pub const SCRIPT_SLOTS: ScriptSlots = ScriptSlots { name: 1, body: 9 };

#[derive(Debug, Clone, Copy)]
pub struct PrinterSlots {
    pub model: usize,
}

pub const PRINTER_SLOTS: PrinterSlots = PrinterSlots { model: 6 };

#[derive(Debug, Clone, Copy)]
pub struct PolicySlots {
    /// Slot of the `general` block.
    pub general: usize,
    /// Value index of the policy name inside `general`.
    pub name_value: usize,
    /// Value index of the checkin-trigger flag inside `general`.
    pub checkin_trigger_value: usize,
    /// Value index of the execution frequency inside `general`.
    pub frequency_value: usize,
    /// Slot of the `maintenance` block.
    pub maintenance: usize,
    /// Value index of the update-inventory flag inside `maintenance`.
    pub update_inventory_value: usize,
}

pub const POLICY_SLOTS: PolicySlots = PolicySlots {
    general: 0,
    name_value: 1,
    checkin_trigger_value: 4,
    frequency_value: 11,
    maintenance: 9,
    update_inventory_value: 0,
};

#[derive(Debug, Clone, Copy)]
pub struct VppAccountSlots {
    pub id: usize,
    pub name: usize,
    pub expiration: usize,
}

pub const VPP_ACCOUNT_SLOTS: VppAccountSlots = VppAccountSlots {
    id: 0,
    name: 1,
    expiration: 5,
};

#[derive(Debug, Clone, Copy)]
pub struct LdapServerSlots {
    /// Slot of the `connection` block; the rest are value indexes inside it.
    pub connection: usize,
    pub id_value: usize,
    pub name_value: usize,
    pub address_value: usize,
    pub type_value: usize,
}

pub const LDAP_SERVER_SLOTS: LdapServerSlots = LdapServerSlots {
    connection: 0,
    id_value: 0,
    name_value: 1,
    address_value: 2,
    type_value: 3,
};
