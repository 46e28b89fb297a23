//! Persistence for the user-roadmap document.
//!
//! One row per user, whole-document upsert on every mutation (last-write-wins
//! when two sessions race). `save` is the single choke point: it recomputes
//! `stats` from `tasks` before anything hits the database.

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::roadmap::UserRoadmapRow;
use crate::roadmap::document::UserRoadmapDoc;

/// Fetches a user's roadmap, creating an empty one on first touch. Roadmap
/// existence is an implementation detail, never a user-visible 404.
pub async fn get_or_create(pool: &PgPool, user_id: Uuid) -> Result<UserRoadmapRow, AppError> {
    let existing = sqlx::query_as::<_, UserRoadmapRow>(
        "SELECT * FROM user_roadmaps WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    match existing {
        Some(row) => Ok(row),
        None => save(pool, user_id, UserRoadmapDoc::default()).await,
    }
}

/// Upserts the whole document and returns the stored row.
pub async fn save(
    pool: &PgPool,
    user_id: Uuid,
    mut doc: UserRoadmapDoc,
) -> Result<UserRoadmapRow, AppError> {
    doc.refresh_stats();

    let row = sqlx::query_as::<_, UserRoadmapRow>(
        r#"
        INSERT INTO user_roadmaps (user_id, tasks, roadmaps, preferences, stats)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (user_id) DO UPDATE SET
            tasks = EXCLUDED.tasks,
            roadmaps = EXCLUDED.roadmaps,
            preferences = EXCLUDED.preferences,
            stats = EXCLUDED.stats,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(Json(&doc.tasks))
    .bind(Json(&doc.roadmaps))
    .bind(Json(&doc.preferences))
    .bind(Json(&doc.stats))
    .fetch_one(pool)
    .await?;

    Ok(row)
}
