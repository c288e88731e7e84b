//! Repository for the technicians collection. Technicians are seed-only, so
//! there are no write methods.

use solar_core::models::Technician;

use crate::store::Store;

pub struct TechnicianRepo;

impl TechnicianRepo {
    pub async fn list_all(store: &Store) -> Vec<Technician> {
        store.read().await.technicians.clone()
    }

    pub async fn find_by_id(store: &Store, id: &str) -> Option<Technician> {
        store
            .read()
            .await
            .technicians
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    /// Technicians currently taking work.
    pub async fn list_active(store: &Store) -> Vec<Technician> {
        store
            .read()
            .await
            .technicians
            .iter()
            .filter(|t| t.active)
            .cloned()
            .collect()
    }
}
