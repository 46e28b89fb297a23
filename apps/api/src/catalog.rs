//! Static roadmap catalog — read-only reference data seeded by migration.
//! The service only ever reads it; imports copy tasks into user roadmaps.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::catalog::StaticRoadmapRow;
use crate::state::AppState;

/// GET /api/v1/roadmaps/static
pub async fn handle_list_static(
    State(state): State<AppState>,
) -> Result<Json<Vec<StaticRoadmapRow>>, AppError> {
    let roadmaps = sqlx::query_as::<_, StaticRoadmapRow>(
        "SELECT * FROM static_roadmaps ORDER BY track, name",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(roadmaps))
}

/// GET /api/v1/roadmaps/static/:id
pub async fn handle_get_static(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StaticRoadmapRow>, AppError> {
    let roadmap = sqlx::query_as::<_, StaticRoadmapRow>(
        "SELECT * FROM static_roadmaps WHERE id = $1",
    )
    .bind(&id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Static roadmap '{id}' not found")))?;
    Ok(Json(roadmap))
}
