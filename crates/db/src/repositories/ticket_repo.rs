//! Repository for the tickets collection.
//!
//! Every mutation stamps `updated_at`; notes and parts are append-only.

use chrono::Utc;
use solar_core::activity;
use solar_core::error::CoreError;
use solar_core::models::{CreateTicket, NewNote, NewPart, Ticket, UpdateTicket};
use solar_core::status::TicketStatus;
use solar_core::types::new_id;
use solar_core::validation::{check_resolution_order, require_reference, validate_input};

use crate::store::{Collections, Store};

/// Provides CRUD and append operations over tickets.
pub struct TicketRepo;

impl TicketRepo {
    /// All tickets in insertion order.
    pub async fn list_all(store: &Store) -> Vec<Ticket> {
        store.read().await.tickets.clone()
    }

    /// Find a ticket by id.
    pub async fn find_by_id(store: &Store, id: &str) -> Option<Ticket> {
        store
            .read()
            .await
            .tickets
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    pub async fn find_by_installation_id(store: &Store, installation_id: &str) -> Vec<Ticket> {
        store
            .read()
            .await
            .tickets
            .iter()
            .filter(|t| t.installation_id == installation_id)
            .cloned()
            .collect()
    }

    pub async fn find_by_technician_id(store: &Store, technician_id: &str) -> Vec<Ticket> {
        store
            .read()
            .await
            .tickets
            .iter()
            .filter(|t| t.assigned_technician_id.as_deref() == Some(technician_id))
            .cloned()
            .collect()
    }

    /// Validate and append a new ticket.
    ///
    /// The installation must exist, as must the assigned technician when one
    /// is given. `created_at == updated_at` on the stored record.
    pub async fn create(store: &Store, input: CreateTicket) -> Result<Ticket, CoreError> {
        validate_input(&input)?;

        let mut collections = store.write().await;
        require_reference(
            collections.has_installation(&input.installation_id),
            "installationId",
            "installation",
            &input.installation_id,
        )?;
        if let Some(tech_id) = input.assigned_technician_id.as_deref() {
            require_reference(
                collections.has_technician(tech_id),
                "assignedTechnicianId",
                "technician",
                tech_id,
            )?;
        }

        let ticket = input.into_ticket(new_id("ticket"), Utc::now());
        collections.tickets.push(ticket.clone());

        if store.live_activity() {
            let entry = activity::ticket_created(&ticket, &collections.technicians);
            collections.push_activity(entry);
        }

        tracing::debug!(ticket_id = %ticket.id, installation_id = %ticket.installation_id, "Ticket stored");
        Ok(ticket)
    }

    /// Shallow-merge `input` into the ticket with `id` and bump `updated_at`,
    /// even when no field actually changes.
    pub async fn update(store: &Store, id: &str, input: UpdateTicket) -> Result<Ticket, CoreError> {
        let mut collections = store.write().await;
        let index = position(&collections, id)?;
        validate_input(&input)?;

        if let Some(Some(tech_id)) = input.assigned_technician_id.as_ref() {
            require_reference(
                collections.has_technician(tech_id),
                "assignedTechnicianId",
                "technician",
                tech_id,
            )?;
        }

        let mut updated = collections.tickets[index].clone();
        input.apply_to(&mut updated, Utc::now());
        check_resolution_order(updated.created_at, updated.resolved_at)?;

        Ok(commit(store, &mut collections, index, updated))
    }

    /// Move a ticket to `status`. Entering `resolved` stamps `resolved_at`.
    pub async fn change_status(
        store: &Store,
        id: &str,
        status: TicketStatus,
    ) -> Result<Ticket, CoreError> {
        Self::update(store, id, UpdateTicket::status(status)).await
    }

    /// Append an internal note and bump `updated_at`.
    pub async fn add_note(store: &Store, ticket_id: &str, note: NewNote) -> Result<Ticket, CoreError> {
        let mut collections = store.write().await;
        let index = position(&collections, ticket_id)?;
        validate_input(&note)?;

        let now = Utc::now();
        let mut updated = collections.tickets[index].clone();
        updated.internal_notes.push(note.into_note(new_id("note"), now));
        updated.touch(now);

        Ok(commit(store, &mut collections, index, updated))
    }

    /// Append a part used and bump `updated_at`.
    pub async fn add_part(store: &Store, ticket_id: &str, part: NewPart) -> Result<Ticket, CoreError> {
        let mut collections = store.write().await;
        let index = position(&collections, ticket_id)?;
        validate_input(&part)?;

        let mut updated = collections.tickets[index].clone();
        updated.parts_used.push(part.into_part(new_id("part")));
        updated.touch(Utc::now());

        Ok(commit(store, &mut collections, index, updated))
    }
}

fn position(collections: &Collections, id: &str) -> Result<usize, CoreError> {
    collections
        .tickets
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| CoreError::not_found("Ticket", id))
}

/// Store the mutated ticket and, when live recording is on, append a
/// `ticket_updated` entry stamped at its new `updated_at`.
fn commit(store: &Store, collections: &mut Collections, index: usize, updated: Ticket) -> Ticket {
    collections.tickets[index] = updated.clone();

    if store.live_activity() {
        let entry = activity::ticket_updated(&updated, &collections.technicians);
        collections.push_activity(entry);
    }

    tracing::debug!(ticket_id = %updated.id, status = %updated.status, "Ticket updated");
    updated
}
