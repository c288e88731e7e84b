//! Activity feed derivation.
//!
//! Builds [`NewActivity`] / [`Activity`] entries from tickets and
//! installations. The startup pass over seed data uses deterministic ids
//! derived from the entity id; entries appended by later writes get fresh
//! ids from the store.

use crate::models::{Activity, Installation, NewActivity, Technician, Ticket};
use crate::status::{ActivityType, EntityType};

/// Actor id used when nobody is assigned.
pub const SYSTEM_USER_ID: &str = "system";
/// Actor name used when nobody is assigned.
pub const SYSTEM_USER_NAME: &str = "System";
/// Actor name used when the assigned technician cannot be found.
pub const UNKNOWN_USER_NAME: &str = "Unknown";

/// Resolve who an event is attributed to.
///
/// An assigned technician is attributed by name ("Unknown" if the id does
/// not resolve); an unassigned entity is attributed to the system actor.
pub fn resolve_actor(assigned: Option<&str>, technicians: &[Technician]) -> (String, String) {
    match assigned {
        Some(tech_id) => {
            let name = technicians
                .iter()
                .find(|t| t.id == tech_id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| UNKNOWN_USER_NAME.to_string());
            (tech_id.to_string(), name)
        }
        None => (SYSTEM_USER_ID.to_string(), SYSTEM_USER_NAME.to_string()),
    }
}

/// A `ticket_created` entry stamped at the ticket's `created_at`.
pub fn ticket_created(ticket: &Ticket, technicians: &[Technician]) -> NewActivity {
    let (user_id, user_name) = resolve_actor(ticket.assigned_technician_id.as_deref(), technicians);
    NewActivity {
        activity_type: ActivityType::TicketCreated,
        entity_id: ticket.id.clone(),
        entity_type: EntityType::Ticket,
        description: format!("Ticket \"{}\" created", ticket.title),
        user_id,
        user_name,
        created_at: ticket.created_at,
    }
}

/// A `ticket_updated` entry stamped at the ticket's `updated_at`.
pub fn ticket_updated(ticket: &Ticket, technicians: &[Technician]) -> NewActivity {
    let (user_id, user_name) = resolve_actor(ticket.assigned_technician_id.as_deref(), technicians);
    NewActivity {
        activity_type: ActivityType::TicketUpdated,
        entity_id: ticket.id.clone(),
        entity_type: EntityType::Ticket,
        description: format!("Ticket \"{}\" updated", ticket.title),
        user_id,
        user_name,
        created_at: ticket.updated_at,
    }
}

/// An `installation_created` entry stamped at `installed_at`.
pub fn installation_created(installation: &Installation, technicians: &[Technician]) -> NewActivity {
    let (user_id, user_name) =
        resolve_actor(installation.assigned_technician_id.as_deref(), technicians);
    NewActivity {
        activity_type: ActivityType::InstallationCreated,
        entity_id: installation.id.clone(),
        entity_type: EntityType::Installation,
        description: format!("Installation \"{}\" created", installation.site_name),
        user_id,
        user_name,
        created_at: installation.installed_at,
    }
}

/// An `installation_updated` entry. Installations carry no update
/// timestamp, so the caller supplies when the change happened.
pub fn installation_updated(
    installation: &Installation,
    technicians: &[Technician],
    at: crate::types::Timestamp,
) -> NewActivity {
    let (user_id, user_name) =
        resolve_actor(installation.assigned_technician_id.as_deref(), technicians);
    NewActivity {
        activity_type: ActivityType::InstallationUpdated,
        entity_id: installation.id.clone(),
        entity_type: EntityType::Installation,
        description: format!("Installation \"{}\" updated", installation.site_name),
        user_id,
        user_name,
        created_at: at,
    }
}

/// The one-time startup scan over seed data.
///
/// For each ticket: a created entry, plus an updated entry when
/// `updated_at != created_at`. Then one created entry per installation.
pub fn derive_seed_activities(
    tickets: &[Ticket],
    installations: &[Installation],
    technicians: &[Technician],
) -> Vec<Activity> {
    let mut activities = Vec::with_capacity(tickets.len() * 2 + installations.len());

    for ticket in tickets {
        activities.push(ticket_created(ticket, technicians).with_id(format!("act-{}", ticket.id)));
        if ticket.updated_at != ticket.created_at {
            activities.push(
                ticket_updated(ticket, technicians).with_id(format!("act-{}-update", ticket.id)),
            );
        }
    }

    for installation in installations {
        activities.push(
            installation_created(installation, technicians)
                .with_id(format!("act-inst-{}", installation.id)),
        );
    }

    activities
}
