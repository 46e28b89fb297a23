//! Domain types for the user-roadmap aggregator.
//!
//! Wire and storage names are camelCase: the JSONB documents predate this
//! service and the frontend stores/sends them in that shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Enums
// ────────────────────────────────────────────────────────────────────────────

/// Per-task progress state. Regression (completed → in-progress) is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Article,
    Course,
    Practice,
}

/// Allowed values for the `sortBy` preference. Anything else rejects the
/// whole preference update at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    Order,
    AddedAt,
    Difficulty,
    Track,
}

// ────────────────────────────────────────────────────────────────────────────
// Document pieces
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

/// One task in a user's roadmap. Copied, not referenced, from its static
/// source: later edits to the catalog never propagate here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTask {
    pub task_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub is_custom: bool,
    /// Informational back-reference to the static task this was cloned from.
    #[serde(default)]
    pub static_task_id: Option<String>,
    #[serde(default = "default_track")]
    pub roadmap_track: String,
    /// Present only when the task arrived via a bulk roadmap import.
    #[serde(default)]
    pub roadmap_id: Option<String>,
    #[serde(default)]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub notes: String,
    pub order: i32,
    pub added_at: DateTime<Utc>,
    /// Set on the transition into `completed`; never cleared on regression.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

pub(crate) fn default_track() -> String {
    "General".to_string()
}

/// Summary entry recorded once per bulk-imported static roadmap. Deleting it
/// cascades to every task sharing its `roadmapId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapEntry {
    pub roadmap_id: String,
    pub name: String,
    pub track: String,
    pub task_count: usize,
    pub date_added: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub default_track: String,
    pub show_completed: bool,
    pub sort_by: SortBy,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            default_track: default_track(),
            show_completed: true,
            sort_by: SortBy::Order,
        }
    }
}

/// Derived counters. Recomputed from `tasks` at the persistence choke point
/// on every save; never trusted as independent input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub in_progress_tasks: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Request payloads
// ────────────────────────────────────────────────────────────────────────────

/// Body of POST /roadmaps/user/add.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskRequest {
    pub task_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default)]
    pub static_task_id: Option<String>,
    #[serde(default)]
    pub roadmap_track: Option<String>,
    #[serde(default)]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub notes: String,
}

/// One incoming task in a bulk roadmap import. The catalog sends `id`; older
/// clients send `taskId`; with neither, the array index synthesizes the id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportTask {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub task_id: Option<String>,
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
}

/// Body of POST /roadmaps/user/add-roadmap.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRoadmapRequest {
    pub roadmap_id: String,
    pub roadmap_name: String,
    #[serde(default)]
    pub roadmap_track: Option<String>,
    #[serde(default)]
    pub tasks: Vec<ImportTask>,
}

/// Body of PATCH /roadmaps/user/update — one mutation per request, tagged by
/// `action`. Each variant carries only the fields it needs, so an unknown
/// action or a missing field fails closed before any state is touched.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum TaskMutation {
    #[serde(rename_all = "camelCase")]
    UpdateStatus { task_id: String, updates: StatusUpdate },
    #[serde(rename_all = "camelCase")]
    UpdateNotes { task_id: String, updates: NotesUpdate },
    #[serde(rename_all = "camelCase")]
    Reorder { task_id: String, new_order: i32 },
    #[serde(rename_all = "camelCase")]
    Remove { task_id: String },
    #[serde(rename_all = "camelCase")]
    UpdateDetails {
        task_id: String,
        updates: TaskDetailsUpdate,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdate {
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotesUpdate {
    #[serde(default)]
    pub notes: String,
}

/// Full-field edit payload; only custom tasks accept it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetailsUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub resources: Option<Vec<Resource>>,
}

/// Allow-listed preference keys. Unknown keys are dropped by serde; a bad
/// `sortBy` value rejects the whole body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatch {
    pub default_track: Option<String>,
    pub show_completed: Option<bool>,
    pub sort_by: Option<SortBy>,
}

impl PreferencesPatch {
    /// True when no recognized key survived filtering.
    pub fn is_empty(&self) -> bool {
        self.default_track.is_none() && self.show_completed.is_none() && self.sort_by.is_none()
    }
}

// The mutation and preference contracts live entirely in serde attributes, so
// they are pinned here from raw JSON rather than from constructed values.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_dispatches_on_action() {
        let mutation: TaskMutation = serde_json::from_str(
            r#"{"action":"update-status","taskId":"t1","updates":{"status":"completed"}}"#,
        )
        .unwrap();
        assert!(matches!(
            mutation,
            TaskMutation::UpdateStatus { ref task_id, ref updates }
                if task_id == "t1" && updates.status == TaskStatus::Completed
        ));
    }

    #[test]
    fn test_mutation_unknown_action_rejected() {
        let result = serde_json::from_str::<TaskMutation>(
            r#"{"action":"rename-task","taskId":"t1","updates":{"name":"X"}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_mutation_missing_action_rejected() {
        let result =
            serde_json::from_str::<TaskMutation>(r#"{"taskId":"t1","newOrder":3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_mutation_missing_variant_field_rejected() {
        // reorder without its newOrder must not fall through to another shape
        let result =
            serde_json::from_str::<TaskMutation>(r#"{"action":"reorder","taskId":"t1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_mutation_bad_status_value_rejected() {
        let result = serde_json::from_str::<TaskMutation>(
            r#"{"action":"update-status","taskId":"t1","updates":{"status":"done"}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_preferences_patch_invalid_sort_by_rejects_whole_body() {
        let result = serde_json::from_str::<PreferencesPatch>(
            r#"{"showCompleted":false,"sortBy":"alphabetical"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_preferences_patch_drops_unknown_keys() {
        let patch: PreferencesPatch =
            serde_json::from_str(r#"{"stats":{"totalTasks":999},"theme":"dark"}"#).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_preferences_patch_keeps_known_keys() {
        let patch: PreferencesPatch = serde_json::from_str(
            r#"{"defaultTrack":"Backend","sortBy":"addedAt","tasks":[]}"#,
        )
        .unwrap();
        assert_eq!(patch.default_track.as_deref(), Some("Backend"));
        assert_eq!(patch.sort_by, Some(SortBy::AddedAt));
        assert!(patch.show_completed.is_none());
    }
}
