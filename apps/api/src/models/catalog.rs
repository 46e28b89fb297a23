use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::roadmap::models::{Difficulty, Resource};

/// One task inside a static roadmap. The catalog is read-only reference data;
/// importing copies these into a user's roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticTask {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Display sequence; not required to be contiguous.
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StaticRoadmapRow {
    pub id: String,
    pub name: String,
    pub track: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub tasks: Json<Vec<StaticTask>>,
}
