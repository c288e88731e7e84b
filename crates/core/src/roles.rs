//! Roles and the static permission table.
//!
//! The acting role is a single stored string; see [`ROLE_STORAGE_KEY`].

use serde::{Deserialize, Serialize};

/// Preference key under which the selected role is persisted.
pub const ROLE_STORAGE_KEY: &str = "solar-service-role";

/// Well-known action names checked against the permission table.
pub mod actions {
    pub const VIEW: &str = "view";
    pub const CREATE: &str = "create";
    pub const UPDATE: &str = "update";
    pub const ASSIGN: &str = "assign";
    pub const UPDATE_STATUS: &str = "update_status";
}

const DISPATCHER_ACTIONS: &[&str] = &[
    actions::VIEW,
    actions::CREATE,
    actions::UPDATE,
    actions::ASSIGN,
];

const TECHNICIAN_ACTIONS: &[&str] = &[actions::VIEW, actions::UPDATE_STATUS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Admin,
    Dispatcher,
    Technician,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Dispatcher => "dispatcher",
            Role::Technician => "technician",
        }
    }

    /// Parse a stored role value. Absent or unrecognised values fall back to
    /// [`Role::Admin`].
    pub fn from_stored(value: Option<&str>) -> Role {
        match value.map(str::trim) {
            Some("dispatcher") => Role::Dispatcher,
            Some("technician") => Role::Technician,
            _ => Role::Admin,
        }
    }

    /// Whether this role may perform `action`.
    pub fn can(self, action: &str) -> bool {
        has_permission(self, action)
    }
}

/// Static permission table: admin may do anything, dispatchers manage work,
/// technicians view and move ticket status.
pub fn has_permission(role: Role, action: &str) -> bool {
    match role {
        Role::Admin => true,
        Role::Dispatcher => DISPATCHER_ACTIONS.contains(&action),
        Role::Technician => TECHNICIAN_ACTIONS.contains(&action),
    }
}
