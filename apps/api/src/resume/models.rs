//! Resume content blocks and request payloads.
//!
//! These mirror the document shape the frontend already stores (camelCase
//! keys, free-form strings, no cross-entity invariants). Dates are display
//! strings on purpose: the original documents carry "Mar 2022" style values.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Template settings
// ────────────────────────────────────────────────────────────────────────────

/// Theme + color selection. Two historical shapes exist for color choice:
/// newer documents carry a named `colorPalette`, older ones a raw 3-element
/// `colors` list. Both must keep resolving (see `template::resolve_colors`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSettings {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub color_palette: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
}

fn default_theme() -> String {
    "modern".to_string()
}

impl Default for TemplateSettings {
    fn default() -> Self {
        TemplateSettings {
            theme: default_theme(),
            color_palette: None,
            colors: None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content blocks
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub website: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

/// Shared by `skills` and `languages`: a name with a 0–100 proficiency bar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRating {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub progress: u8,
}

/// Keeps proficiency bars in the 0–100 range the templates expect.
pub fn clamp_progress(ratings: &mut [SkillRating]) {
    for rating in ratings {
        rating.progress = rating.progress.min(100);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub live_demo: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub year: String,
}

/// All content blocks of one resume. `Default` is the fixed storage skeleton:
/// empty strings and empty lists, never missing keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    #[serde(default)]
    pub profile_info: ProfileInfo,
    #[serde(default)]
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<SkillRating>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub languages: Vec<SkillRating>,
    #[serde(default)]
    pub interests: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Request payloads
// ────────────────────────────────────────────────────────────────────────────

/// Body of POST /resumes. Anything beyond `title` is optional; omitted blocks
/// land in storage as the default skeleton, never as missing fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResumeRequest {
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub template: Option<TemplateSettings>,
    #[serde(flatten)]
    pub content: ResumeContent,
}

/// Body of PUT /resumes/:id. Whole-field overwrite: a present block replaces
/// the stored subtree in full, it is never deep-merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResumeRequest {
    pub title: Option<String>,
    /// Best-effort client-side capture. The outer `Option` is field presence,
    /// the inner one the stored value: omitted leaves the stored thumbnail
    /// alone, an explicit `null` clears it.
    #[serde(default, deserialize_with = "present")]
    pub thumbnail: Option<Option<String>>,
    pub template: Option<TemplateSettings>,
    pub profile_info: Option<ProfileInfo>,
    pub contact_info: Option<ContactInfo>,
    pub work_experience: Option<Vec<WorkExperience>>,
    pub education: Option<Vec<Education>>,
    pub skills: Option<Vec<SkillRating>>,
    pub projects: Option<Vec<Project>>,
    pub certificates: Option<Vec<Certificate>>,
    pub languages: Option<Vec<SkillRating>>,
    pub interests: Option<Vec<String>>,
}

/// Marks a field as present even when its value is `null`, so `null` and
/// "omitted" stay distinguishable after deserialization.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
