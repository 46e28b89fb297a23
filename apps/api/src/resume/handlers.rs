//! Axum route handlers for the resume surface: owner-scoped CRUD plus
//! server-side rendering of the merged document to one of the three layouts.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::resume::models::{
    clamp_progress, Certificate, ContactInfo, CreateResumeRequest, Education, ProfileInfo,
    Project, SkillRating, TemplateSettings, UpdateResumeRequest, WorkExperience,
};
use crate::resume::render::render_html;
use crate::resume::store;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub thumbnail: Option<String>,
    pub template: TemplateSettings,
    pub profile_info: ProfileInfo,
    pub contact_info: ContactInfo,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillRating>,
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
    pub languages: Vec<SkillRating>,
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ResumeRow> for ResumeResponse {
    fn from(row: ResumeRow) -> Self {
        ResumeResponse {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            thumbnail: row.thumbnail,
            template: row.template.0,
            profile_info: row.profile_info.0,
            contact_info: row.contact_info.0,
            work_experience: row.work_experience.0,
            education: row.education.0,
            skills: row.skills.0,
            projects: row.projects.0,
            certificates: row.certificates.0,
            languages: row.languages.0,
            interests: row.interests.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    /// Optional preview override; the stored theme renders when absent.
    pub theme: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(mut request): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeResponse>), AppError> {
    clamp_progress(&mut request.content.skills);
    clamp_progress(&mut request.content.languages);
    let row = store::create(&state.db, user_id, request).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<ResumeResponse>>, AppError> {
    let rows = store::list_for_user(&state.db, user_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeResponse>, AppError> {
    let row = store::get_owned(&state.db, user_id, id).await?;
    Ok(Json(row.into()))
}

/// PUT /api/v1/resumes/:id
///
/// Whole-field overwrite: each present field replaces the stored subtree in
/// full. The thumbnail is best-effort client capture: omitting it leaves the
/// stored one alone, sending `null` clears it.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateResumeRequest>,
) -> Result<Json<ResumeResponse>, AppError> {
    let mut row = store::get_owned(&state.db, user_id, id).await?;

    if let Some(title) = request.title {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::Validation("title cannot be empty".to_string()));
        }
        row.title = title;
    }
    if let Some(thumbnail) = request.thumbnail {
        row.thumbnail = thumbnail;
    }
    if let Some(template) = request.template {
        row.template.0 = template;
    }
    if let Some(profile_info) = request.profile_info {
        row.profile_info.0 = profile_info;
    }
    if let Some(contact_info) = request.contact_info {
        row.contact_info.0 = contact_info;
    }
    if let Some(work_experience) = request.work_experience {
        row.work_experience.0 = work_experience;
    }
    if let Some(education) = request.education {
        row.education.0 = education;
    }
    if let Some(mut skills) = request.skills {
        clamp_progress(&mut skills);
        row.skills.0 = skills;
    }
    if let Some(projects) = request.projects {
        row.projects.0 = projects;
    }
    if let Some(certificates) = request.certificates {
        row.certificates.0 = certificates;
    }
    if let Some(mut languages) = request.languages {
        clamp_progress(&mut languages);
        row.languages.0 = languages;
    }
    if let Some(interests) = request.interests {
        row.interests.0 = interests;
    }

    let updated = store::update(&state.db, &row).await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let row = store::get_owned(&state.db, user_id, id).await?;
    store::delete(&state.db, row.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/resumes/:id/render
pub async fn handle_render_resume(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
    Query(query): Query<RenderQuery>,
) -> Result<Html<String>, AppError> {
    let row = store::get_owned(&state.db, user_id, id).await?;

    let mut settings = row.template.0.clone();
    if let Some(theme) = query.theme {
        settings.theme = theme;
    }

    Ok(Html(render_html(&row.content(), &settings)))
}
