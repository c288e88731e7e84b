//! Pure selection, filtering and sorting over repository results.
//!
//! Nothing here holds state; callers fetch collections from the store and
//! pass them in.

use serde::Deserialize;

use crate::error::CoreError;
use crate::models::{Installation, Ticket};
use crate::roles::Role;
use crate::status::{InstallationStatus, TicketPriority, TicketStatus, TicketType};
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Tickets
// ---------------------------------------------------------------------------

/// Optional equality predicates over tickets. Absent fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    #[serde(rename = "type")]
    pub ticket_type: Option<TicketType>,
    pub installation_id: Option<EntityId>,
    pub technician_id: Option<EntityId>,
}

impl TicketFilter {
    /// Whether `ticket` satisfies every present predicate.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.status.map_or(true, |s| ticket.status == s)
            && self.priority.map_or(true, |p| ticket.priority == p)
            && self.ticket_type.map_or(true, |t| ticket.ticket_type == t)
            && self
                .installation_id
                .as_deref()
                .map_or(true, |id| ticket.installation_id == id)
            && self
                .technician_id
                .as_deref()
                .map_or(true, |id| ticket.assigned_technician_id.as_deref() == Some(id))
    }
}

/// AND-compose the filter's predicates and sort newest first.
///
/// The sort is stable, so tickets sharing a `created_at` keep their input
/// order.
pub fn filter_tickets(tickets: Vec<Ticket>, filter: &TicketFilter) -> Vec<Ticket> {
    let mut selected: Vec<Ticket> = tickets.into_iter().filter(|t| filter.matches(t)).collect();
    sort_newest_first(&mut selected);
    selected
}

/// Sort tickets by `created_at` descending, ties in input order.
pub fn sort_newest_first(tickets: &mut [Ticket]) {
    tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Restrict visible tickets for the acting role.
///
/// Technicians only see tickets assigned to themselves, so the caller must
/// say who the acting technician is. Other roles see everything.
pub fn narrow_for_role(
    tickets: Vec<Ticket>,
    role: Role,
    acting_technician_id: Option<&str>,
) -> Result<Vec<Ticket>, CoreError> {
    if role != Role::Technician {
        return Ok(tickets);
    }
    let Some(tech_id) = acting_technician_id.filter(|id| !id.is_empty()) else {
        return Err(CoreError::Validation(
            "actingTechnicianId is required for the technician role".to_string(),
        ));
    };
    Ok(tickets
        .into_iter()
        .filter(|t| t.assigned_technician_id.as_deref() == Some(tech_id))
        .collect())
}

/// Tickets still needing work (open or in progress).
pub fn open_tickets(tickets: &[Ticket]) -> Vec<Ticket> {
    tickets.iter().filter(|t| t.status.is_open()).cloned().collect()
}

// ---------------------------------------------------------------------------
// Installations
// ---------------------------------------------------------------------------

/// Case-insensitive substring match against client name, site name, address
/// and city. Surrounding whitespace is ignored and a blank query matches
/// every installation.
pub fn installation_matches(installation: &Installation, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [
        &installation.client_name,
        &installation.site_name,
        &installation.address,
        &installation.city,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Optional free-text search composed with an optional exact status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationFilter {
    pub search: Option<String>,
    pub status: Option<InstallationStatus>,
}

impl InstallationFilter {
    /// The search term, if one was given and is not blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Apply the search (if any) and then the status filter (if any).
///
/// Search is not status-aware; the status predicate narrows whatever the
/// search produced. Input order is preserved.
pub fn filter_installations(
    installations: Vec<Installation>,
    filter: &InstallationFilter,
) -> Vec<Installation> {
    let search = filter.search_term();
    installations
        .into_iter()
        .filter(|inst| search.map_or(true, |q| installation_matches(inst, q)))
        .filter(|inst| filter.status.map_or(true, |s| inst.status == s))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
