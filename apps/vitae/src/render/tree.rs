//! The rendered document tree — what a template produces and the exporter
//! consumes. Purely structural; no styling beyond what the layout config
//! already decided.

use serde::{Deserialize, Serialize};

use crate::models::TemplateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Summary => "Summary",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    SingleColumn,
    TwoColumn,
}

/// Name plus the non-empty contact lines, in fixed display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub contact: Vec<String>,
}

/// One entry within a section. Blank parts are simply empty and are skipped
/// by consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionItem {
    /// Primary line, e.g. "Senior Engineer — Acme".
    pub heading: String,
    /// Secondary line, usually a date range.
    pub meta: String,
    /// Free-text lines (descriptions, GPA, technologies, links).
    pub body: Vec<String>,
    /// Achievement bullets (experience only).
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub items: Vec<SectionItem>,
}

/// A fully rendered resume. `sidebar` is empty for single-column layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub template: TemplateId,
    pub layout: LayoutKind,
    pub header: Header,
    pub sidebar: Vec<Section>,
    pub main: Vec<Section>,
}

impl RenderedDocument {
    /// True when the document would rasterize to zero height: no header text
    /// and no sections anywhere.
    pub fn is_empty(&self) -> bool {
        self.header.name.is_empty()
            && self.header.contact.is_empty()
            && self.sidebar.is_empty()
            && self.main.is_empty()
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sidebar.iter().chain(self.main.iter())
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections().find(|s| s.kind == kind)
    }
}
