use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::resume::models::{
    Certificate, ContactInfo, Education, ProfileInfo, Project, ResumeContent, SkillRating,
    TemplateSettings, WorkExperience,
};

/// The `resumes` row. A user may own many; every access checks `user_id`
/// against the requesting principal.
#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub thumbnail: Option<String>,
    pub template: Json<TemplateSettings>,
    pub profile_info: Json<ProfileInfo>,
    pub contact_info: Json<ContactInfo>,
    pub work_experience: Json<Vec<WorkExperience>>,
    pub education: Json<Vec<Education>>,
    pub skills: Json<Vec<SkillRating>>,
    pub projects: Json<Vec<Project>>,
    pub certificates: Json<Vec<Certificate>>,
    pub languages: Json<Vec<SkillRating>>,
    pub interests: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeRow {
    /// Collects the content blocks into the renderer's input shape.
    pub fn content(&self) -> ResumeContent {
        ResumeContent {
            profile_info: self.profile_info.0.clone(),
            contact_info: self.contact_info.0.clone(),
            work_experience: self.work_experience.0.clone(),
            education: self.education.0.clone(),
            skills: self.skills.0.clone(),
            projects: self.projects.0.clone(),
            certificates: self.certificates.0.clone(),
            languages: self.languages.0.clone(),
            interests: self.interests.0.clone(),
        }
    }
}
