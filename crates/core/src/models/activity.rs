use serde::{Deserialize, Serialize};

use crate::status::{ActivityType, EntityType};
use crate::types::{EntityId, Timestamp};

/// An audit-feed entry describing a creation or update event.
///
/// Never mutated after creation. `created_at` mirrors the source event's
/// timestamp, not the time the entry was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub entity_id: EntityId,
    pub entity_type: EntityType,
    pub description: String,
    pub user_id: String,
    pub user_name: String,
    pub created_at: Timestamp,
}

/// An activity entry before it has been assigned an id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub entity_id: EntityId,
    pub entity_type: EntityType,
    pub description: String,
    pub user_id: String,
    pub user_name: String,
    pub created_at: Timestamp,
}

impl NewActivity {
    pub fn with_id(self, id: EntityId) -> Activity {
        Activity {
            id,
            activity_type: self.activity_type,
            entity_id: self.entity_id,
            entity_type: self.entity_type,
            description: self.description,
            user_id: self.user_id,
            user_name: self.user_name,
            created_at: self.created_at,
        }
    }
}
