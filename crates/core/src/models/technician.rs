use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// A field worker who may be assigned to installations and tickets.
/// Technicians are seed-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialties: BTreeSet<String>,
    pub active: bool,
}
