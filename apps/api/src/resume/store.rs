//! Persistence for resume documents.
//!
//! Writes are whole-document: update replaces every column from an overlaid
//! in-memory row, matching the `$set` semantics the frontend depends on
//! (a present block replaces its whole subtree, no deep merge).

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::resume::models::CreateResumeRequest;

pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    req: CreateResumeRequest,
) -> Result<ResumeRow, AppError> {
    let title = req.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::Validation("title is required".to_string()));
    }

    // Caller-supplied fields land on the fixed default skeleton; nothing is
    // ever stored as a missing key.
    let content = req.content;
    let template = req.template.unwrap_or_default();

    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes
            (user_id, title, thumbnail, template, profile_info, contact_info,
             work_experience, education, skills, projects, certificates,
             languages, interests)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(title)
    .bind(req.thumbnail)
    .bind(Json(&template))
    .bind(Json(&content.profile_info))
    .bind(Json(&content.contact_info))
    .bind(Json(&content.work_experience))
    .bind(Json(&content.education))
    .bind(Json(&content.skills))
    .bind(Json(&content.projects))
    .bind(Json(&content.certificates))
    .bind(Json(&content.languages))
    .bind(Json(&content.interests))
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Most recently edited first, as the dashboard lists them.
pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<ResumeRow>, AppError> {
    Ok(sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY updated_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

/// Fetches one resume and enforces ownership: unknown id is a 404, someone
/// else's resume is a 403.
pub async fn get_owned(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<ResumeRow, AppError> {
    let row = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    if row.user_id != user_id {
        return Err(AppError::Forbidden);
    }
    Ok(row)
}

/// Writes back an already-overlaid row in full.
pub async fn update(pool: &PgPool, row: &ResumeRow) -> Result<ResumeRow, AppError> {
    let updated = sqlx::query_as::<_, ResumeRow>(
        r#"
        UPDATE resumes SET
            title = $2,
            thumbnail = $3,
            template = $4,
            profile_info = $5,
            contact_info = $6,
            work_experience = $7,
            education = $8,
            skills = $9,
            projects = $10,
            certificates = $11,
            languages = $12,
            interests = $13,
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.title)
    .bind(&row.thumbnail)
    .bind(Json(&row.template.0))
    .bind(Json(&row.profile_info.0))
    .bind(Json(&row.contact_info.0))
    .bind(Json(&row.work_experience.0))
    .bind(Json(&row.education.0))
    .bind(Json(&row.skills.0))
    .bind(Json(&row.projects.0))
    .bind(Json(&row.certificates.0))
    .bind(Json(&row.languages.0))
    .bind(Json(&row.interests.0))
    .fetch_one(pool)
    .await?;

    Ok(updated)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    sqlx::query("DELETE FROM resumes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
