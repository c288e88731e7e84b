//! Query parameter types shared across handler modules.

use serde::Deserialize;
use solar_core::query::TicketFilter;
use solar_core::status::{TicketPriority, TicketStatus, TicketType};
use solar_core::types::EntityId;

/// `GET /tickets` parameters: the filter plus who is asking.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketListParams {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    #[serde(rename = "type")]
    pub ticket_type: Option<TicketType>,
    pub installation_id: Option<EntityId>,
    pub technician_id: Option<EntityId>,
    /// Required when the acting role is `technician`.
    pub acting_technician_id: Option<EntityId>,
}

impl TicketListParams {
    pub fn filter(&self) -> TicketFilter {
        TicketFilter {
            status: self.status,
            priority: self.priority,
            ticket_type: self.ticket_type,
            installation_id: self.installation_id.clone(),
            technician_id: self.technician_id.clone(),
        }
    }
}

/// `?limit=` for the activity feed.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

/// `?active=true` restricts technician listings to those taking work.
#[derive(Debug, Deserialize)]
pub struct ActiveParams {
    #[serde(default)]
    pub active: bool,
}
