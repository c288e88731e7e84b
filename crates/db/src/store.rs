use std::collections::HashMap;

use solar_core::activity::derive_seed_activities;
use solar_core::models::{Activity, Installation, NewActivity, Technician, Ticket};
use solar_core::types::new_id;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Initial contents for a [`Store`].
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub installations: Vec<Installation>,
    pub tickets: Vec<Ticket>,
    pub technicians: Vec<Technician>,
}

/// The raw collections. Only reachable through the store's lock.
#[derive(Debug, Default)]
pub(crate) struct Collections {
    pub installations: Vec<Installation>,
    pub tickets: Vec<Ticket>,
    pub technicians: Vec<Technician>,
    pub activities: Vec<Activity>,
    pub preferences: HashMap<String, String>,
}

impl Collections {
    fn from_seed(seed: Seed) -> Self {
        let activities =
            derive_seed_activities(&seed.tickets, &seed.installations, &seed.technicians);
        Self {
            installations: seed.installations,
            tickets: seed.tickets,
            technicians: seed.technicians,
            activities,
            preferences: HashMap::new(),
        }
    }

    pub fn has_installation(&self, id: &str) -> bool {
        self.installations.iter().any(|i| i.id == id)
    }

    pub fn has_technician(&self, id: &str) -> bool {
        self.technicians.iter().any(|t| t.id == id)
    }

    /// Assign an id and append to the feed.
    pub fn push_activity(&mut self, activity: NewActivity) -> Activity {
        let stored = activity.with_id(new_id("act"));
        self.activities.push(stored.clone());
        stored
    }
}

/// Process-wide shared state, held behind a single lock.
///
/// Each repository call takes the lock once, so every operation runs to
/// completion before the next one observes the collections. Concurrent
/// writers are last-write-wins at the granularity of one call.
#[derive(Debug)]
pub struct Store {
    collections: RwLock<Collections>,
    live_activity: bool,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// An empty store with live activity recording enabled.
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(Collections::default()),
            live_activity: true,
        }
    }

    /// A store loaded from `seed`, with the startup activity pass applied.
    pub fn from_seed(seed: Seed) -> Self {
        Self {
            collections: RwLock::new(Collections::from_seed(seed)),
            live_activity: true,
        }
    }

    /// Toggle whether writes append activity entries.
    ///
    /// With recording off the feed only holds what the startup pass derived.
    pub fn with_live_activity(mut self, enabled: bool) -> Self {
        self.live_activity = enabled;
        self
    }

    pub fn live_activity(&self) -> bool {
        self.live_activity
    }

    /// Replace all contents with `seed` and rerun the startup activity pass.
    /// Preferences are cleared.
    pub async fn initialize(&self, seed: Seed) {
        let counts = (seed.installations.len(), seed.tickets.len(), seed.technicians.len());
        *self.collections.write().await = Collections::from_seed(seed);
        tracing::debug!(
            installations = counts.0,
            tickets = counts.1,
            technicians = counts.2,
            "Store initialized"
        );
    }

    /// Drop every record and preference.
    pub async fn reset(&self) {
        *self.collections.write().await = Collections::default();
        tracing::debug!("Store reset");
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.collections.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.collections.write().await
    }
}
