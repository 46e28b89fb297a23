#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::roadmap::document::UserRoadmapDoc;
use crate::roadmap::models::{Preferences, RoadmapEntry, RoadmapStats, UserTask};

/// The `user_roadmaps` row: one document per user, JSONB payloads decoded
/// through the typed domain structs.
#[derive(Debug, Clone, FromRow)]
pub struct UserRoadmapRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub tasks: Json<Vec<UserTask>>,
    pub roadmaps: Json<Vec<RoadmapEntry>>,
    pub preferences: Json<Preferences>,
    pub stats: Json<RoadmapStats>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRoadmapRow {
    pub fn into_doc(self) -> UserRoadmapDoc {
        UserRoadmapDoc {
            tasks: self.tasks.0,
            roadmaps: self.roadmaps.0,
            preferences: self.preferences.0,
            stats: self.stats.0,
        }
    }
}
