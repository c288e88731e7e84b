//! Key/value preferences, used for the selected role.

use solar_core::roles::{Role, ROLE_STORAGE_KEY};

use crate::store::Store;

pub struct PreferenceRepo;

impl PreferenceRepo {
    pub async fn get(store: &Store, key: &str) -> Option<String> {
        store.read().await.preferences.get(key).cloned()
    }

    /// Overwrite the value stored under `key`.
    pub async fn set(store: &Store, key: &str, value: &str) {
        store
            .write()
            .await
            .preferences
            .insert(key.to_string(), value.to_string());
    }

    /// The selected role; absent or unrecognised values read as admin.
    pub async fn current_role(store: &Store) -> Role {
        let stored = Self::get(store, ROLE_STORAGE_KEY).await;
        Role::from_stored(stored.as_deref())
    }

    pub async fn set_current_role(store: &Store, role: Role) {
        Self::set(store, ROLE_STORAGE_KEY, role.as_str()).await;
        tracing::info!(role = role.as_str(), "Role selected");
    }
}
