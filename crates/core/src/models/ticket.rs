//! Ticket entity, its append-only children, and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::status::{TicketPriority, TicketStatus, TicketType};
use crate::types::{nullable, EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalNote {
    pub id: EntityId,
    pub author_id: EntityId,
    pub content: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartUsed {
    pub id: EntityId,
    pub name: String,
    pub qty: u32,
    pub cost: f64,
}

/// A unit of service work against an installation.
///
/// `internal_notes` and `parts_used` only ever grow; `updated_at` is bumped
/// on every mutation and never moves backwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: EntityId,
    pub installation_id: EntityId,
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub title: String,
    pub description: String,
    pub assigned_technician_id: Option<EntityId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
    pub internal_notes: Vec<InternalNote>,
    pub parts_used: Vec<PartUsed>,
}

impl Ticket {
    /// Sum of `qty * cost` over all parts used.
    pub fn parts_cost(&self) -> f64 {
        self.parts_used
            .iter()
            .map(|p| f64::from(p.qty) * p.cost)
            .sum()
    }

    /// Advance `updated_at` to `now`, never moving it backwards.
    pub fn touch(&mut self, now: Timestamp) {
        self.updated_at = self.updated_at.max(now);
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a ticket. Id, timestamps and child collections are
/// assigned by the repository.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicket {
    #[validate(length(min = 1, message = "installationId must not be empty"))]
    pub installation_id: EntityId,
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assigned_technician_id: Option<EntityId>,
}

impl CreateTicket {
    /// Build the stored record. `created_at == updated_at == now`.
    pub fn into_ticket(self, id: EntityId, now: Timestamp) -> Ticket {
        let resolved_at = (self.status == TicketStatus::Resolved).then_some(now);
        Ticket {
            id,
            installation_id: self.installation_id,
            ticket_type: self.ticket_type,
            priority: self.priority,
            status: self.status,
            title: self.title,
            description: self.description,
            assigned_technician_id: self.assigned_technician_id,
            created_at: now,
            updated_at: now,
            resolved_at,
            internal_notes: Vec::new(),
            parts_used: Vec::new(),
        }
    }
}

/// DTO for a partial ticket update. `installationId` is immutable and not
/// accepted here.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicket {
    #[serde(rename = "type")]
    pub ticket_type: Option<TicketType>,
    pub priority: Option<TicketPriority>,
    pub status: Option<TicketStatus>,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub assigned_technician_id: Option<Option<EntityId>>,
    #[serde(default, deserialize_with = "nullable")]
    pub resolved_at: Option<Option<Timestamp>>,
}

impl UpdateTicket {
    /// A patch that only changes the status.
    pub fn status(status: TicketStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Shallow-merge the present fields into `target` and stamp `updated_at`.
    ///
    /// A transition into `resolved` without an explicit `resolvedAt` stamps
    /// it with `now`; any other status change keeps the existing value.
    pub fn apply_to(self, target: &mut Ticket, now: Timestamp) {
        let was_resolved = target.status == TicketStatus::Resolved;

        if let Some(v) = self.ticket_type {
            target.ticket_type = v;
        }
        if let Some(v) = self.priority {
            target.priority = v;
        }
        if let Some(v) = self.status {
            target.status = v;
        }
        if let Some(v) = self.title {
            target.title = v;
        }
        if let Some(v) = self.description {
            target.description = v;
        }
        if let Some(v) = self.assigned_technician_id {
            target.assigned_technician_id = v;
        }
        match self.resolved_at {
            Some(v) => target.resolved_at = v,
            None if !was_resolved && target.status == TicketStatus::Resolved => {
                target.resolved_at = Some(now);
            }
            None => {}
        }

        target.touch(now);
    }
}

/// Payload for appending an internal note.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    #[validate(length(min = 1, message = "authorId must not be empty"))]
    pub author_id: EntityId,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

impl NewNote {
    pub fn into_note(self, id: EntityId, now: Timestamp) -> InternalNote {
        InternalNote {
            id,
            author_id: self.author_id,
            content: self.content,
            created_at: now,
        }
    }
}

/// Payload for appending a part used.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPart {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 1, message = "qty must be at least 1"))]
    pub qty: u32,
    #[validate(range(min = 0.0, message = "cost must not be negative"))]
    pub cost: f64,
}

impl NewPart {
    pub fn into_part(self, id: EntityId) -> PartUsed {
        PartUsed {
            id,
            name: self.name,
            qty: self.qty,
            cost: self.cost,
        }
    }
}
