//! The three resume layouts, rendered server-side to self-contained HTML.
//!
//! Each layout is a pure function of (merged content, resolved colors); the
//! client rasterizes the result for thumbnails and PDF export, so the markup
//! carries inline styles only and no external assets.

use crate::resume::models::{ResumeContent, SkillRating, TemplateSettings};
use crate::resume::template::{merge_with_placeholders, resolve_colors, ResolvedColors, Theme};

/// Renders a resume document to HTML: merge onto placeholders, resolve the
/// color triple, then dispatch on the theme (unknown themes render modern).
pub fn render_html(content: &ResumeContent, settings: &TemplateSettings) -> String {
    let merged = merge_with_placeholders(content);
    let colors = resolve_colors(settings);

    let body = match Theme::from_name(&settings.theme) {
        Theme::Modern => render_modern(&merged, &colors),
        Theme::Classic => render_classic(&merged, &colors),
        Theme::Creative => render_creative(&merged, &colors),
    };

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title></head>\
         <body style=\"margin:0;font-family:Helvetica,Arial,sans-serif;\">{body}</body></html>",
        escape(&merged.profile_info.full_name)
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn section_heading(title: &str, colors: &ResolvedColors) -> String {
    format!(
        "<h3 style=\"color:{};border-bottom:2px solid {};padding-bottom:4px;\
         text-transform:uppercase;font-size:13px;letter-spacing:1px;\">{}</h3>",
        colors.dark,
        colors.primary,
        escape(title)
    )
}

fn skill_bars(skills: &[SkillRating], colors: &ResolvedColors) -> String {
    let mut out = String::new();
    for skill in skills {
        let progress = skill.progress.min(100);
        out.push_str(&format!(
            "<div style=\"margin:6px 0;\"><span style=\"font-size:12px;\">{}</span>\
             <div style=\"background:{};height:6px;border-radius:3px;\">\
             <div style=\"background:{};width:{}%;height:6px;border-radius:3px;\"></div></div></div>",
            escape(&skill.name),
            colors.light,
            colors.primary,
            progress
        ));
    }
    out
}

fn experience_block(content: &ResumeContent, colors: &ResolvedColors) -> String {
    let mut out = section_heading("Work Experience", colors);
    for exp in &content.work_experience {
        out.push_str(&format!(
            "<div style=\"margin-bottom:10px;\"><strong>{}</strong> — {}\
             <div style=\"font-size:11px;color:#666;\">{} – {}</div>\
             <p style=\"margin:4px 0;font-size:12px;\">{}</p></div>",
            escape(&exp.role),
            escape(&exp.company),
            escape(&exp.start_date),
            escape(&exp.end_date),
            escape(&exp.description)
        ));
    }
    out
}

fn education_block(content: &ResumeContent, colors: &ResolvedColors) -> String {
    let mut out = section_heading("Education", colors);
    for edu in &content.education {
        out.push_str(&format!(
            "<div style=\"margin-bottom:8px;\"><strong>{}</strong>\
             <div style=\"font-size:12px;\">{}</div>\
             <div style=\"font-size:11px;color:#666;\">{} – {}</div></div>",
            escape(&edu.degree),
            escape(&edu.institution),
            escape(&edu.start_date),
            escape(&edu.end_date)
        ));
    }
    out
}

fn projects_block(content: &ResumeContent, colors: &ResolvedColors) -> String {
    let mut out = section_heading("Projects", colors);
    for project in &content.projects {
        out.push_str(&format!(
            "<div style=\"margin-bottom:8px;\"><strong>{}</strong>\
             <p style=\"margin:2px 0;font-size:12px;\">{}</p>\
             <div style=\"font-size:11px;color:{};\">{} {}</div></div>",
            escape(&project.title),
            escape(&project.description),
            colors.primary,
            escape(&project.github),
            escape(&project.live_demo)
        ));
    }
    out
}

fn certificates_block(content: &ResumeContent, colors: &ResolvedColors) -> String {
    let mut out = section_heading("Certificates", colors);
    for cert in &content.certificates {
        out.push_str(&format!(
            "<div style=\"font-size:12px;margin-bottom:4px;\"><strong>{}</strong> — {} ({})</div>",
            escape(&cert.title),
            escape(&cert.issuer),
            escape(&cert.year)
        ));
    }
    out
}

fn interests_block(content: &ResumeContent, colors: &ResolvedColors) -> String {
    let mut out = section_heading("Interests", colors);
    out.push_str("<div>");
    for interest in &content.interests {
        out.push_str(&format!(
            "<span style=\"display:inline-block;background:{};color:{};padding:2px 8px;\
             margin:2px;border-radius:10px;font-size:11px;\">{}</span>",
            colors.light,
            colors.dark,
            escape(interest)
        ));
    }
    out.push_str("</div>");
    out
}

fn contact_lines(content: &ResumeContent) -> String {
    let c = &content.contact_info;
    [
        &c.email, &c.phone, &c.location, &c.linkedin, &c.github, &c.website,
    ]
    .iter()
    .map(|value| format!("<div style=\"font-size:11px;margin:2px 0;\">{}</div>", escape(value)))
    .collect()
}

/// Modern: colored sidebar (contact, skills, languages) + main column.
fn render_modern(content: &ResumeContent, colors: &ResolvedColors) -> String {
    format!(
        "<div style=\"display:flex;min-height:1100px;\">\
         <aside style=\"width:30%;background:{};padding:20px;\">\
         <h1 style=\"color:{};font-size:22px;margin:0 0 2px;\">{}</h1>\
         <div style=\"font-size:13px;margin-bottom:14px;\">{}</div>\
         {}{}{}{}\
         </aside>\
         <main style=\"width:70%;padding:20px;\">\
         <p style=\"font-size:12px;\">{}</p>\
         {}{}{}{}\
         </main></div>",
        colors.light,
        colors.dark,
        escape(&content.profile_info.full_name),
        escape(&content.profile_info.designation),
        contact_lines(content),
        section_heading("Skills", colors),
        skill_bars(&content.skills, colors),
        interests_block(content, colors),
        escape(&content.profile_info.summary),
        experience_block(content, colors),
        projects_block(content, colors),
        education_block(content, colors),
        certificates_block(content, colors),
    )
}

/// Classic: centered header, single column, understated color accents.
fn render_classic(content: &ResumeContent, colors: &ResolvedColors) -> String {
    let languages: String = content
        .languages
        .iter()
        .map(|l| escape(&l.name))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "<div style=\"max-width:760px;margin:0 auto;padding:30px;\">\
         <header style=\"text-align:center;border-bottom:3px double {};padding-bottom:12px;\">\
         <h1 style=\"margin:0;font-size:26px;color:{};\">{}</h1>\
         <div style=\"font-size:14px;\">{}</div>\
         <div style=\"font-size:11px;color:#555;\">{} · {} · {}</div>\
         </header>\
         <p style=\"font-size:12px;\">{}</p>\
         {}{}{}\
         {}<div style=\"font-size:12px;\">{}</div>\
         {}\
         </div>",
        colors.primary,
        colors.dark,
        escape(&content.profile_info.full_name),
        escape(&content.profile_info.designation),
        escape(&content.contact_info.email),
        escape(&content.contact_info.phone),
        escape(&content.contact_info.location),
        escape(&content.profile_info.summary),
        experience_block(content, colors),
        education_block(content, colors),
        certificates_block(content, colors),
        section_heading("Languages", colors),
        languages,
        interests_block(content, colors),
    )
}

/// Creative: full-width banner header, two equal columns below.
fn render_creative(content: &ResumeContent, colors: &ResolvedColors) -> String {
    format!(
        "<header style=\"background:{};color:#fff;padding:28px;\">\
         <h1 style=\"margin:0;font-size:28px;\">{}</h1>\
         <div style=\"font-size:14px;opacity:0.9;\">{}</div>\
         <div style=\"font-size:11px;margin-top:6px;\">{} · {}</div>\
         </header>\
         <div style=\"display:flex;gap:24px;padding:20px;\">\
         <div style=\"width:50%;\">\
         <p style=\"font-size:12px;\">{}</p>\
         {}{}\
         </div>\
         <div style=\"width:50%;\">\
         {}{}{}{}{}\
         </div></div>",
        colors.primary,
        escape(&content.profile_info.full_name),
        escape(&content.profile_info.designation),
        escape(&content.contact_info.email),
        escape(&content.contact_info.website),
        escape(&content.profile_info.summary),
        experience_block(content, colors),
        projects_block(content, colors),
        section_heading("Skills", colors),
        skill_bars(&content.skills, colors),
        education_block(content, colors),
        certificates_block(content, colors),
        interests_block(content, colors),
    )
}
