//! Axum route handlers for the user-roadmap surface.
//!
//! Every mutation is load → pure document operation → save; the operation
//! fails with the document untouched or the whole document persists with
//! freshly recomputed stats. The roadmap document is keyed by the caller's
//! id, so ownership holds by construction.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::roadmap::UserRoadmapRow;
use crate::roadmap::models::{
    AddRoadmapRequest, NewTaskRequest, Preferences, PreferencesPatch, RoadmapEntry, RoadmapStats,
    TaskMutation, UserTask,
};
use crate::roadmap::store;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoadmapResponse {
    pub user_id: Uuid,
    pub tasks: Vec<UserTask>,
    pub roadmaps: Vec<RoadmapEntry>,
    pub preferences: Preferences,
    pub stats: RoadmapStats,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRoadmapRow> for UserRoadmapResponse {
    fn from(row: UserRoadmapRow) -> Self {
        UserRoadmapResponse {
            user_id: row.user_id,
            tasks: row.tasks.0,
            roadmaps: row.roadmaps.0,
            preferences: row.preferences.0,
            stats: row.stats.0,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRoadmapResponse {
    pub added: usize,
    pub skipped: usize,
    pub roadmap: UserRoadmapResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRoadmapResponse {
    pub removed_tasks: usize,
    pub roadmap: UserRoadmapResponse,
}

/// Body of PATCH /roadmaps/user/preferences. Accepts either a nested
/// `{"preferences": {...}}` object or the preference keys inline.
#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesRequest {
    #[serde(default)]
    preferences: Option<PreferencesPatch>,
    #[serde(flatten)]
    inline: PreferencesPatch,
}

impl UpdatePreferencesRequest {
    fn into_patch(self) -> PreferencesPatch {
        self.preferences.unwrap_or(self.inline)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roadmaps/user
pub async fn handle_get_user_roadmap(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<UserRoadmapResponse>, AppError> {
    let row = store::get_or_create(&state.db, user_id).await?;
    Ok(Json(row.into()))
}

/// POST /api/v1/roadmaps/user/add
pub async fn handle_add_task(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<NewTaskRequest>,
) -> Result<Json<UserRoadmapResponse>, AppError> {
    let task_name = request.name.clone();
    let mut doc = store::get_or_create(&state.db, user_id).await?.into_doc();
    doc.add_task(request, Utc::now())?;
    let row = store::save(&state.db, user_id, doc).await?;

    let notifier = state.notifier.clone();
    tokio::spawn(async move {
        notifier.task_added(user_id, &task_name).await;
    });

    Ok(Json(row.into()))
}

/// POST /api/v1/roadmaps/user/add-roadmap
pub async fn handle_add_roadmap(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<AddRoadmapRequest>,
) -> Result<Json<ImportRoadmapResponse>, AppError> {
    let roadmap_name = request.roadmap_name.clone();
    let mut doc = store::get_or_create(&state.db, user_id).await?.into_doc();
    let outcome = doc.add_roadmap(request, Utc::now())?;
    let row = store::save(&state.db, user_id, doc).await?;

    let notifier = state.notifier.clone();
    let added = outcome.added;
    tokio::spawn(async move {
        notifier.roadmap_imported(user_id, &roadmap_name, added).await;
    });

    Ok(Json(ImportRoadmapResponse {
        added: outcome.added,
        skipped: outcome.skipped,
        roadmap: row.into(),
    }))
}

/// PATCH /api/v1/roadmaps/user/update
pub async fn handle_update_task(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(mutation): Json<TaskMutation>,
) -> Result<Json<UserRoadmapResponse>, AppError> {
    let mut doc = store::get_or_create(&state.db, user_id).await?.into_doc();
    doc.apply_mutation(mutation, Utc::now())?;
    let row = store::save(&state.db, user_id, doc).await?;
    Ok(Json(row.into()))
}

/// PATCH /api/v1/roadmaps/user/preferences
pub async fn handle_update_preferences(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<UpdatePreferencesRequest>,
) -> Result<Json<UserRoadmapResponse>, AppError> {
    let mut doc = store::get_or_create(&state.db, user_id).await?.into_doc();
    doc.apply_preferences(request.into_patch())?;
    let row = store::save(&state.db, user_id, doc).await?;
    Ok(Json(row.into()))
}

/// DELETE /api/v1/roadmaps/user/delete-roadmap/:roadmap_id
pub async fn handle_delete_roadmap(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(roadmap_id): Path<String>,
) -> Result<Json<DeleteRoadmapResponse>, AppError> {
    let mut doc = store::get_or_create(&state.db, user_id).await?.into_doc();
    let removed_tasks = doc.remove_roadmap(&roadmap_id)?;
    let row = store::save(&state.db, user_id, doc).await?;
    Ok(Json(DeleteRoadmapResponse {
        removed_tasks,
        roadmap: row.into(),
    }))
}
