//! Template rendering — a pure function from the aggregate to a document tree.
//!
//! `render` never fails: any well-typed `ResumeData` produces output, with
//! absent sections simply omitted. Template variants contribute only a layout
//! config; all derived computation is shared.

pub mod derive;
pub mod templates;
pub mod tree;

use crate::models::{Education, Experience, Project, ResumeData};
use crate::render::derive::{
    date_range, experience_date_range, group_skills, skill_group_line,
};
use crate::render::templates::{layout_for, TemplateLayout};
use crate::render::tree::{Header, RenderedDocument, Section, SectionItem, SectionKind};

pub use templates::FontFace;
pub use tree::{LayoutKind, SectionKind as RenderedSectionKind};

/// Renders the aggregate with its currently selected template.
pub fn render(data: &ResumeData) -> RenderedDocument {
    let layout = layout_for(data.selected_template);

    let main = build_sections(data, layout, layout.section_order);
    let sidebar = build_sections(data, layout, layout.sidebar);

    RenderedDocument {
        template: data.selected_template,
        layout: layout.layout,
        header: build_header(data),
        sidebar,
        main,
    }
}

fn build_header(data: &ResumeData) -> Header {
    let info = &data.personal_info;
    let contact = [
        info.email.as_str(),
        info.phone.as_str(),
        info.linkedin.as_str(),
        info.portfolio.as_str(),
        info.address.as_str(),
    ]
    .iter()
    .filter(|v| !v.is_empty())
    .map(|v| v.to_string())
    .collect();

    Header {
        name: info.full_name.clone(),
        contact,
    }
}

fn build_sections(
    data: &ResumeData,
    layout: &TemplateLayout,
    order: &[SectionKind],
) -> Vec<Section> {
    order
        .iter()
        .filter_map(|kind| build_section(data, layout, *kind))
        .collect()
}

/// Returns `None` for sections with no content; they are omitted from the tree.
fn build_section(
    data: &ResumeData,
    layout: &TemplateLayout,
    kind: SectionKind,
) -> Option<Section> {
    let items: Vec<SectionItem> = match kind {
        SectionKind::Summary => {
            if data.summary.is_empty() {
                vec![]
            } else {
                vec![SectionItem {
                    body: vec![data.summary.clone()],
                    ..SectionItem::default()
                }]
            }
        }
        SectionKind::Experience => data.experience.iter().map(experience_item).collect(),
        SectionKind::Education => data.education.iter().map(education_item).collect(),
        SectionKind::Skills => group_skills(&data.skills)
            .into_iter()
            .map(|(category, members)| SectionItem {
                heading: category,
                body: vec![skill_group_line(&members, layout.show_skill_levels)],
                ..SectionItem::default()
            })
            .collect(),
        SectionKind::Projects => data.projects.iter().map(project_item).collect(),
    };

    if items.is_empty() {
        return None;
    }
    Some(Section {
        kind,
        title: kind.title().to_string(),
        items,
    })
}

fn experience_item(entry: &Experience) -> SectionItem {
    SectionItem {
        heading: join_heading(&entry.position, &entry.company),
        meta: experience_date_range(entry),
        body: non_empty(&[entry.description.clone()]),
        bullets: entry
            .bullet_points
            .iter()
            .filter(|b| !b.trim().is_empty())
            .cloned()
            .collect(),
    }
}

fn education_item(entry: &Education) -> SectionItem {
    let degree = if entry.field.is_empty() {
        entry.degree.clone()
    } else if entry.degree.is_empty() {
        entry.field.clone()
    } else {
        format!("{} in {}", entry.degree, entry.field)
    };

    let mut body = non_empty(&[entry.description.clone()]);
    if let Some(gpa) = entry.gpa.as_deref().filter(|g| !g.is_empty()) {
        body.push(format!("GPA: {gpa}"));
    }

    SectionItem {
        heading: join_heading(&degree, &entry.school),
        meta: date_range(&entry.start_date, &entry.end_date),
        body,
        bullets: vec![],
    }
}

fn project_item(entry: &Project) -> SectionItem {
    let mut body = non_empty(&[entry.description.clone()]);
    if !entry.technologies.is_empty() {
        body.push(format!("Technologies: {}", entry.technologies.join(", ")));
    }
    if let Some(link) = entry.link.as_deref().filter(|l| !l.is_empty()) {
        body.push(link.to_string());
    }
    if let Some(github) = entry.github.as_deref().filter(|g| !g.is_empty()) {
        body.push(github.to_string());
    }

    SectionItem {
        heading: entry.title.clone(),
        meta: date_range(&entry.start_date, &entry.end_date),
        body,
        bullets: vec![],
    }
}

fn join_heading(primary: &str, secondary: &str) -> String {
    match (primary.is_empty(), secondary.is_empty()) {
        (true, true) => String::new(),
        (false, true) => primary.to_string(),
        (true, false) => secondary.to_string(),
        (false, false) => format!("{primary} — {secondary}"),
    }
}

fn non_empty(lines: &[String]) -> Vec<String> {
    lines.iter().filter(|l| !l.is_empty()).cloned().collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
