//! Repository for the installations collection.

use chrono::Utc;
use solar_core::activity;
use solar_core::error::CoreError;
use solar_core::models::{CreateInstallation, Installation, UpdateInstallation};
use solar_core::query::installation_matches;
use solar_core::types::new_id;
use solar_core::validation::{require_reference, validate_input};

use crate::store::Store;

/// Provides CRUD and search over installations.
pub struct InstallationRepo;

impl InstallationRepo {
    /// All installations in insertion order.
    pub async fn list_all(store: &Store) -> Vec<Installation> {
        store.read().await.installations.clone()
    }

    /// Find an installation by id.
    pub async fn find_by_id(store: &Store, id: &str) -> Option<Installation> {
        store
            .read()
            .await
            .installations
            .iter()
            .find(|i| i.id == id)
            .cloned()
    }

    /// Installations whose assigned technician is `technician_id`.
    pub async fn find_by_technician_id(store: &Store, technician_id: &str) -> Vec<Installation> {
        store
            .read()
            .await
            .installations
            .iter()
            .filter(|i| i.assigned_technician_id.as_deref() == Some(technician_id))
            .cloned()
            .collect()
    }

    /// Case-insensitive search over client name, site name, address and
    /// city. An empty query returns every installation.
    pub async fn search(store: &Store, query: &str) -> Vec<Installation> {
        store
            .read()
            .await
            .installations
            .iter()
            .filter(|i| installation_matches(i, query))
            .cloned()
            .collect()
    }

    /// Validate and append a new installation under a fresh id.
    pub async fn create(store: &Store, input: CreateInstallation) -> Result<Installation, CoreError> {
        validate_input(&input)?;

        let mut collections = store.write().await;
        if let Some(tech_id) = input.assigned_technician_id.as_deref() {
            require_reference(
                collections.has_technician(tech_id),
                "assignedTechnicianId",
                "technician",
                tech_id,
            )?;
        }

        let installation = input.into_installation(new_id("inst"));
        collections.installations.push(installation.clone());

        if store.live_activity() {
            let entry = activity::installation_created(&installation, &collections.technicians);
            collections.push_activity(entry);
        }

        tracing::debug!(installation_id = %installation.id, "Installation stored");
        Ok(installation)
    }

    /// Shallow-merge `input` into the installation with `id`. A missing id is
    /// reported before any problem with the payload.
    pub async fn update(
        store: &Store,
        id: &str,
        input: UpdateInstallation,
    ) -> Result<Installation, CoreError> {
        let mut collections = store.write().await;
        let index = collections
            .installations
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CoreError::not_found("Installation", id))?;
        validate_input(&input)?;

        if let Some(Some(tech_id)) = input.assigned_technician_id.as_ref() {
            require_reference(
                collections.has_technician(tech_id),
                "assignedTechnicianId",
                "technician",
                tech_id,
            )?;
        }

        let mut updated = collections.installations[index].clone();
        input.apply_to(&mut updated);
        collections.installations[index] = updated.clone();

        if store.live_activity() {
            let entry =
                activity::installation_updated(&updated, &collections.technicians, Utc::now());
            collections.push_activity(entry);
        }

        tracing::debug!(installation_id = %updated.id, "Installation updated");
        Ok(updated)
    }
}
