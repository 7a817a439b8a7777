//! Declarative layout configs for the eight template variants.
//!
//! A template is section order + column split + type choices. All data
//! semantics are shared (see `derive`); two templates with the same config
//! fields would produce identical trees.

use crate::models::TemplateId;
use crate::render::tree::{LayoutKind, SectionKind};

/// Typeface family for a template. The exporter maps this to a concrete
/// built-in PDF font and its metric table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Helvetica,
    Times,
}

#[derive(Debug, Clone)]
pub struct TemplateLayout {
    pub layout: LayoutKind,
    pub font: FontFace,
    /// Body size in points; headings scale from this.
    pub base_size_pt: f32,
    /// Section order for single-column layouts, and the main column for
    /// two-column layouts.
    pub section_order: &'static [SectionKind],
    /// Sections pulled into the sidebar (two-column layouts only).
    pub sidebar: &'static [SectionKind],
    /// Whether skill lines carry the 1–5 proficiency.
    pub show_skill_levels: bool,
    /// The section this template visually leads with; feeds the scoring
    /// heuristic's template-fit adjustment.
    pub emphasis: SectionKind,
}

use SectionKind::{Education, Experience, Projects, Skills, Summary};

const STANDARD_ORDER: &[SectionKind] = &[Summary, Experience, Education, Skills, Projects];
const CREATIVE_ORDER: &[SectionKind] = &[Summary, Projects, Experience, Skills, Education];
const EXECUTIVE_ORDER: &[SectionKind] = &[Summary, Experience, Education, Skills, Projects];
const TWO_COLUMN_MAIN: &[SectionKind] = &[Summary, Experience, Projects];
const TWO_COLUMN_SIDE: &[SectionKind] = &[Skills, Education];

static MODERN: TemplateLayout = TemplateLayout {
    layout: LayoutKind::SingleColumn,
    font: FontFace::Helvetica,
    base_size_pt: 10.5,
    section_order: STANDARD_ORDER,
    sidebar: &[],
    show_skill_levels: false,
    emphasis: Skills,
};

static CLASSIC: TemplateLayout = TemplateLayout {
    layout: LayoutKind::SingleColumn,
    font: FontFace::Times,
    base_size_pt: 11.0,
    section_order: STANDARD_ORDER,
    sidebar: &[],
    show_skill_levels: false,
    emphasis: Education,
};

static CREATIVE: TemplateLayout = TemplateLayout {
    layout: LayoutKind::SingleColumn,
    font: FontFace::Helvetica,
    base_size_pt: 10.5,
    section_order: CREATIVE_ORDER,
    sidebar: &[],
    show_skill_levels: true,
    emphasis: Projects,
};

static MINIMALIST: TemplateLayout = TemplateLayout {
    layout: LayoutKind::SingleColumn,
    font: FontFace::Helvetica,
    base_size_pt: 10.0,
    section_order: STANDARD_ORDER,
    sidebar: &[],
    show_skill_levels: false,
    emphasis: Summary,
};

static EXECUTIVE: TemplateLayout = TemplateLayout {
    layout: LayoutKind::SingleColumn,
    font: FontFace::Times,
    base_size_pt: 11.0,
    section_order: EXECUTIVE_ORDER,
    sidebar: &[],
    show_skill_levels: false,
    emphasis: Experience,
};

static PROFESSIONAL: TemplateLayout = TemplateLayout {
    layout: LayoutKind::SingleColumn,
    font: FontFace::Times,
    base_size_pt: 10.5,
    section_order: STANDARD_ORDER,
    sidebar: &[],
    show_skill_levels: false,
    emphasis: Experience,
};

static COMPACT: TemplateLayout = TemplateLayout {
    layout: LayoutKind::SingleColumn,
    font: FontFace::Helvetica,
    base_size_pt: 9.5,
    section_order: STANDARD_ORDER,
    sidebar: &[],
    show_skill_levels: false,
    emphasis: Skills,
};

static TWO_COLUMN: TemplateLayout = TemplateLayout {
    layout: LayoutKind::TwoColumn,
    font: FontFace::Helvetica,
    base_size_pt: 10.0,
    section_order: TWO_COLUMN_MAIN,
    sidebar: TWO_COLUMN_SIDE,
    show_skill_levels: true,
    emphasis: Skills,
};

pub fn layout_for(template: TemplateId) -> &'static TemplateLayout {
    match template {
        TemplateId::Modern => &MODERN,
        TemplateId::Classic => &CLASSIC,
        TemplateId::Creative => &CREATIVE,
        TemplateId::Minimalist => &MINIMALIST,
        TemplateId::Executive => &EXECUTIVE,
        TemplateId::Professional => &PROFESSIONAL,
        TemplateId::Compact => &COMPACT,
        TemplateId::TwoColumn => &TWO_COLUMN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_has_a_layout() {
        for id in TemplateId::ALL {
            let layout = layout_for(id);
            assert!(!layout.section_order.is_empty(), "{id:?} has no sections");
        }
    }

    #[test]
    fn test_only_two_column_uses_a_sidebar() {
        for id in TemplateId::ALL {
            let layout = layout_for(id);
            match layout.layout {
                LayoutKind::TwoColumn => assert!(!layout.sidebar.is_empty()),
                LayoutKind::SingleColumn => assert!(layout.sidebar.is_empty()),
            }
        }
    }

    #[test]
    fn test_column_split_covers_all_sections_once() {
        let layout = layout_for(TemplateId::TwoColumn);
        let mut all: Vec<SectionKind> = layout
            .section_order
            .iter()
            .chain(layout.sidebar.iter())
            .copied()
            .collect();
        all.sort_by_key(|k| k.title());
        all.dedup();
        assert_eq!(all.len(), 5);
    }
}
