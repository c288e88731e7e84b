//! Repository for the activity feed.

use solar_core::models::{Activity, NewActivity};
use solar_core::status::EntityType;

use crate::store::Store;

/// Default number of entries returned by [`ActivityRepo::list_recent`].
pub const DEFAULT_RECENT_LIMIT: usize = 20;

/// Maximum number of entries a caller may request at once.
pub const MAX_RECENT_LIMIT: usize = 200;

pub struct ActivityRepo;

impl ActivityRepo {
    /// The `limit` most recent entries, newest first.
    ///
    /// Entries sharing a `created_at` keep insertion order, so boot-derived
    /// and live-appended entries interleave deterministically.
    pub async fn list_recent(store: &Store, limit: usize) -> Vec<Activity> {
        let mut activities = store.read().await.activities.clone();
        activities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        activities.truncate(limit.min(MAX_RECENT_LIMIT));
        activities
    }

    /// Entries referring to one entity, in insertion order.
    pub async fn find_by_entity(
        store: &Store,
        entity_id: &str,
        entity_type: EntityType,
    ) -> Vec<Activity> {
        store
            .read()
            .await
            .activities
            .iter()
            .filter(|a| a.entity_id == entity_id && a.entity_type == entity_type)
            .cloned()
            .collect()
    }

    /// Append an entry under a fresh id.
    pub async fn create(store: &Store, activity: NewActivity) -> Activity {
        store.write().await.push_activity(activity)
    }
}
