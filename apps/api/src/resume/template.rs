//! Default-merge and template resolution for the resume renderer.
//!
//! # Merge policy
//! Scalar blocks (`profileInfo`, `contactInfo`) merge key-by-key: document
//! values win, placeholders fill blanks. List blocks are all-or-nothing: the
//! placeholder list is used only when the document's list is empty — a
//! partial list of real user data renders as-is, never with placeholder rows
//! mixed in.
//!
//! # Color resolution
//! Two historical document shapes select colors: a raw `colors` 3-element
//! list (oldest), or a named `colorPalette` id. The resolver tries them in
//! that priority order and falls back to a hardcoded default triple. This is
//! a compatibility shim for stored documents; keep both paths.

use crate::resume::models::{
    Certificate, ContactInfo, Education, ProfileInfo, Project, ResumeContent, SkillRating,
    TemplateSettings, WorkExperience,
};

// ────────────────────────────────────────────────────────────────────────────
// Themes
// ────────────────────────────────────────────────────────────────────────────

/// The three fixed layouts. Unrecognized names fall back to `Modern`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Modern,
    Classic,
    Creative,
}

impl Theme {
    pub fn from_name(name: &str) -> Theme {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" => Theme::Classic,
            "creative" => Theme::Creative,
            _ => Theme::Modern,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Color palettes
// ────────────────────────────────────────────────────────────────────────────

/// A resolved `{primary, dark, light}` triple fed to the layout functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColors {
    pub primary: String,
    pub dark: String,
    pub light: String,
}

/// Named palettes selectable via `template.colorPalette`.
const PALETTES: &[(&str, [&str; 3])] = &[
    ("blue", ["#2563eb", "#1e3a8a", "#dbeafe"]),
    ("emerald", ["#059669", "#064e3b", "#d1fae5"]),
    ("rose", ["#e11d48", "#881337", "#ffe4e6"]),
    ("slate", ["#475569", "#0f172a", "#e2e8f0"]),
    ("amber", ["#d97706", "#78350f", "#fef3c7"]),
    ("violet", ["#7c3aed", "#4c1d95", "#ede9fe"]),
];

/// Fallback when a document names neither colors nor a known palette.
const DEFAULT_COLORS: [&str; 3] = ["#0891b2", "#164e63", "#cffafe"];

fn triple(colors: [&str; 3]) -> ResolvedColors {
    ResolvedColors {
        primary: colors[0].to_string(),
        dark: colors[1].to_string(),
        light: colors[2].to_string(),
    }
}

/// Resolves the 3-color set with explicit priority:
/// direct `colors` list → named `colorPalette` → hardcoded default.
pub fn resolve_colors(settings: &TemplateSettings) -> ResolvedColors {
    if let Some(colors) = &settings.colors {
        if colors.len() == 3 {
            return ResolvedColors {
                primary: colors[0].clone(),
                dark: colors[1].clone(),
                light: colors[2].clone(),
            };
        }
    }

    if let Some(palette) = &settings.color_palette {
        if let Some((_, colors)) = PALETTES.iter().find(|(name, _)| name == palette) {
            return triple(*colors);
        }
    }

    triple(DEFAULT_COLORS)
}

// ────────────────────────────────────────────────────────────────────────────
// Placeholder dataset
// ────────────────────────────────────────────────────────────────────────────

/// Fixed sample content shown wherever a resume document is still blank.
pub fn placeholder_content() -> ResumeContent {
    ResumeContent {
        profile_info: ProfileInfo {
            full_name: "Alex Morgan".to_string(),
            designation: "Full Stack Developer".to_string(),
            summary: "Developer with 4+ years building web applications end to end, \
                      from data models to polished interfaces."
                .to_string(),
        },
        contact_info: ContactInfo {
            email: "alex.morgan@example.com".to_string(),
            phone: "+1 555 010 2030".to_string(),
            location: "Portland, OR".to_string(),
            linkedin: "linkedin.com/in/alexmorgan".to_string(),
            github: "github.com/alexmorgan".to_string(),
            website: "alexmorgan.dev".to_string(),
        },
        work_experience: vec![
            WorkExperience {
                company: "Northwind Labs".to_string(),
                role: "Senior Developer".to_string(),
                start_date: "Jan 2022".to_string(),
                end_date: "Present".to_string(),
                description: "Lead a team of four building the customer-facing dashboard."
                    .to_string(),
            },
            WorkExperience {
                company: "Acme Digital".to_string(),
                role: "Web Developer".to_string(),
                start_date: "Jun 2019".to_string(),
                end_date: "Dec 2021".to_string(),
                description: "Built and maintained e-commerce storefronts for 20+ clients."
                    .to_string(),
            },
        ],
        education: vec![Education {
            degree: "B.Sc. Computer Science".to_string(),
            institution: "Portland State University".to_string(),
            start_date: "2015".to_string(),
            end_date: "2019".to_string(),
        }],
        skills: vec![
            SkillRating {
                name: "JavaScript".to_string(),
                progress: 90,
            },
            SkillRating {
                name: "React".to_string(),
                progress: 85,
            },
            SkillRating {
                name: "Node.js".to_string(),
                progress: 80,
            },
            SkillRating {
                name: "SQL".to_string(),
                progress: 75,
            },
        ],
        projects: vec![Project {
            title: "Trail Tracker".to_string(),
            description: "Open-source hiking log with offline map support.".to_string(),
            github: "github.com/alexmorgan/trail-tracker".to_string(),
            live_demo: "trailtracker.app".to_string(),
        }],
        certificates: vec![Certificate {
            title: "AWS Certified Developer".to_string(),
            issuer: "Amazon Web Services".to_string(),
            year: "2023".to_string(),
        }],
        languages: vec![
            SkillRating {
                name: "English".to_string(),
                progress: 100,
            },
            SkillRating {
                name: "Spanish".to_string(),
                progress: 60,
            },
        ],
        interests: vec![
            "Hiking".to_string(),
            "Photography".to_string(),
            "Chess".to_string(),
        ],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Default-merge
// ────────────────────────────────────────────────────────────────────────────

fn pick(doc: &str, placeholder: &str) -> String {
    if doc.trim().is_empty() {
        placeholder.to_string()
    } else {
        doc.to_string()
    }
}

fn pick_list<T: Clone>(doc: &[T], placeholder: Vec<T>) -> Vec<T> {
    if doc.is_empty() {
        placeholder
    } else {
        doc.to_vec()
    }
}

/// Overlays a possibly-sparse document onto the placeholder dataset.
/// Pure: neither input is mutated.
pub fn merge_with_placeholders(doc: &ResumeContent) -> ResumeContent {
    let ph = placeholder_content();

    ResumeContent {
        profile_info: ProfileInfo {
            full_name: pick(&doc.profile_info.full_name, &ph.profile_info.full_name),
            designation: pick(&doc.profile_info.designation, &ph.profile_info.designation),
            summary: pick(&doc.profile_info.summary, &ph.profile_info.summary),
        },
        contact_info: ContactInfo {
            email: pick(&doc.contact_info.email, &ph.contact_info.email),
            phone: pick(&doc.contact_info.phone, &ph.contact_info.phone),
            location: pick(&doc.contact_info.location, &ph.contact_info.location),
            linkedin: pick(&doc.contact_info.linkedin, &ph.contact_info.linkedin),
            github: pick(&doc.contact_info.github, &ph.contact_info.github),
            website: pick(&doc.contact_info.website, &ph.contact_info.website),
        },
        work_experience: pick_list(&doc.work_experience, ph.work_experience),
        education: pick_list(&doc.education, ph.education),
        skills: pick_list(&doc.skills, ph.skills),
        projects: pick_list(&doc.projects, ph.projects),
        certificates: pick_list(&doc.certificates, ph.certificates),
        languages: pick_list(&doc.languages, ph.languages),
        interests: pick_list(&doc.interests, ph.interests),
    }
}
