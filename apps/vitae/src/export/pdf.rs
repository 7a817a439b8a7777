//! Vector PDF writer — direct document construction, no rasterization.
//!
//! The rendered tree is flattened into per-column line streams (wrapped at
//! the column width via the font metric tables), then paginated by a running
//! vertical cursor: whenever the next line would pass the bottom margin, a
//! page break is inserted and the cursor resets to the top margin. Two-column
//! layouts paginate sidebar and main streams in parallel onto shared pages.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Point};

use crate::errors::AppError;
use crate::export::metrics::{metrics_for, FontMetricTable};
use crate::render::templates::{layout_for, FontFace, TemplateLayout};
use crate::render::tree::{LayoutKind, RenderedDocument, Section};

// A4 portrait.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 15.0;

const SIDEBAR_WIDTH_MM: f32 = 58.0;
const GUTTER_MM: f32 = 8.0;
const LINE_SPACING: f32 = 1.4;
const BULLET_INDENT_MM: f32 = 4.0;

const PT_PER_MM: f32 = 72.0 / 25.4;

fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

fn pt_to_mm(pt: f32) -> f32 {
    pt / PT_PER_MM
}

// ────────────────────────────────────────────────────────────────────────────
// Line stream
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
struct TextStyle {
    size_pt: f32,
    bold: bool,
}

/// One placed line. Empty text is a vertical spacer; `rule` draws a
/// horizontal separator instead of text.
#[derive(Debug, Clone)]
pub(crate) struct PdfLine {
    text: String,
    style: TextStyle,
    indent_mm: f32,
    rule: bool,
}

impl PdfLine {
    fn text(text: impl Into<String>, size_pt: f32, bold: bool, indent_mm: f32) -> Self {
        Self {
            text: text.into(),
            style: TextStyle { size_pt, bold },
            indent_mm,
            rule: false,
        }
    }

    fn spacer(size_pt: f32) -> Self {
        Self::text("", size_pt, false, 0.0)
    }

    fn rule(size_pt: f32) -> Self {
        Self {
            text: String::new(),
            style: TextStyle {
                size_pt,
                bold: false,
            },
            indent_mm: 0.0,
            rule: true,
        }
    }

    fn is_spacer(&self) -> bool {
        self.text.is_empty() && !self.rule
    }

    pub(crate) fn height_mm(&self) -> f32 {
        pt_to_mm(self.style.size_pt) * LINE_SPACING
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Flattening
// ────────────────────────────────────────────────────────────────────────────

struct ColumnWidths {
    sidebar_mm: f32,
    main_mm: f32,
    main_x_mm: f32,
}

fn column_widths(layout: LayoutKind) -> ColumnWidths {
    let content = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    match layout {
        LayoutKind::SingleColumn => ColumnWidths {
            sidebar_mm: 0.0,
            main_mm: content,
            main_x_mm: MARGIN_MM,
        },
        LayoutKind::TwoColumn => ColumnWidths {
            sidebar_mm: SIDEBAR_WIDTH_MM,
            main_mm: content - SIDEBAR_WIDTH_MM - GUTTER_MM,
            main_x_mm: MARGIN_MM + SIDEBAR_WIDTH_MM + GUTTER_MM,
        },
    }
}

/// Flattens the tree into `(main, sidebar)` line streams. The header leads
/// the sidebar in two-column layouts (where the name lives in the side rail)
/// and the main stream otherwise.
pub(crate) fn flatten(doc: &RenderedDocument) -> (Vec<PdfLine>, Vec<PdfLine>) {
    let layout = layout_for(doc.template);
    let metrics = metrics_for(layout.font);
    let widths = column_widths(doc.layout);

    let mut main: Vec<PdfLine> = Vec::new();
    let mut sidebar: Vec<PdfLine> = Vec::new();

    let (header_target, header_width) = match doc.layout {
        LayoutKind::TwoColumn => (&mut sidebar, widths.sidebar_mm),
        LayoutKind::SingleColumn => (&mut main, widths.main_mm),
    };
    flatten_header(doc, layout, metrics, header_width, header_target);

    for section in &doc.main {
        flatten_section(section, layout, metrics, widths.main_mm, &mut main);
    }
    for section in &doc.sidebar {
        flatten_section(section, layout, metrics, widths.sidebar_mm, &mut sidebar);
    }

    (main, sidebar)
}

fn flatten_header(
    doc: &RenderedDocument,
    layout: &TemplateLayout,
    metrics: &FontMetricTable,
    width_mm: f32,
    out: &mut Vec<PdfLine>,
) {
    let base = layout.base_size_pt;
    if !doc.header.name.is_empty() {
        push_wrapped(out, &doc.header.name, base * 2.0, true, 0.0, width_mm, metrics);
    }
    for line in &doc.header.contact {
        push_wrapped(out, line, base * 0.9, false, 0.0, width_mm, metrics);
    }
    if !doc.header.name.is_empty() || !doc.header.contact.is_empty() {
        out.push(PdfLine::rule(base * 0.6));
        out.push(PdfLine::spacer(base * 0.6));
    }
}

fn flatten_section(
    section: &Section,
    layout: &TemplateLayout,
    metrics: &FontMetricTable,
    width_mm: f32,
    out: &mut Vec<PdfLine>,
) {
    let base = layout.base_size_pt;
    push_wrapped(out, &section.title, base * 1.3, true, 0.0, width_mm, metrics);

    for (i, item) in section.items.iter().enumerate() {
        if i > 0 {
            out.push(PdfLine::spacer(base * 0.4));
        }
        if !item.heading.is_empty() {
            push_wrapped(out, &item.heading, base, true, 0.0, width_mm, metrics);
        }
        if !item.meta.is_empty() {
            push_wrapped(out, &item.meta, base * 0.9, false, 0.0, width_mm, metrics);
        }
        for line in &item.body {
            push_wrapped(out, line, base, false, 0.0, width_mm, metrics);
        }
        for bullet in &item.bullets {
            push_wrapped(
                out,
                &format!("• {bullet}"),
                base,
                false,
                BULLET_INDENT_MM,
                width_mm,
                metrics,
            );
        }
    }
    out.push(PdfLine::spacer(base * 0.8));
}

fn push_wrapped(
    out: &mut Vec<PdfLine>,
    text: &str,
    size_pt: f32,
    bold: bool,
    indent_mm: f32,
    width_mm: f32,
    metrics: &FontMetricTable,
) {
    let max_em = mm_to_pt(width_mm - indent_mm) / size_pt;
    for line in metrics.wrap_text(text, max_em) {
        out.push(PdfLine::text(line, size_pt, bold, indent_mm));
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pagination
// ────────────────────────────────────────────────────────────────────────────

/// Chunks a line stream into pages by accumulated height. The cursor resets
/// to the top margin on every break; a spacer is never carried to the top of
/// a fresh page.
pub(crate) fn paginate(lines: Vec<PdfLine>) -> Vec<Vec<PdfLine>> {
    let usable_mm = PAGE_HEIGHT_MM - 2.0 * MARGIN_MM;

    let mut pages: Vec<Vec<PdfLine>> = Vec::new();
    let mut page: Vec<PdfLine> = Vec::new();
    let mut used_mm = 0.0_f32;

    for line in lines {
        if used_mm + line.height_mm() > usable_mm && !page.is_empty() {
            pages.push(std::mem::take(&mut page));
            used_mm = 0.0;
        }
        if page.is_empty() && line.is_spacer() {
            continue;
        }
        used_mm += line.height_mm();
        page.push(line);
    }
    if !page.is_empty() {
        pages.push(page);
    }
    pages
}

// ────────────────────────────────────────────────────────────────────────────
// Document assembly
// ────────────────────────────────────────────────────────────────────────────

/// Writes the rendered tree to `out_path` as a paginated A4 PDF.
/// Returns the page count.
pub fn write_pdf(doc: &RenderedDocument, out_path: &Path) -> Result<u32, AppError> {
    let layout = layout_for(doc.template);
    let widths = column_widths(doc.layout);

    let (main_lines, sidebar_lines) = flatten(doc);
    let main_pages = paginate(main_lines);
    let sidebar_pages = paginate(sidebar_lines);
    let page_count = main_pages.len().max(sidebar_pages.len()).max(1);

    let title = if doc.header.name.is_empty() {
        "Resume".to_string()
    } else {
        format!("{} — Resume", doc.header.name)
    };
    let (pdf, first_page, first_layer) = PdfDocument::new(
        title.as_str(),
        Mm(PAGE_WIDTH_MM.into()),
        Mm(PAGE_HEIGHT_MM.into()),
        "Layer 1",
    );

    let (regular, bold) = builtin_fonts(layout.font);
    let regular = pdf
        .add_builtin_font(regular)
        .map_err(|e| AppError::ExportRender(format!("font load: {e}")))?;
    let bold = pdf
        .add_builtin_font(bold)
        .map_err(|e| AppError::ExportRender(format!("font load: {e}")))?;

    for page_index in 0..page_count {
        let layer = if page_index == 0 {
            pdf.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = pdf.add_page(Mm(PAGE_WIDTH_MM.into()), Mm(PAGE_HEIGHT_MM.into()), "Layer 1");
            pdf.get_page(page).get_layer(layer)
        };

        if let Some(lines) = sidebar_pages.get(page_index) {
            draw_column(&layer, lines, MARGIN_MM, widths.sidebar_mm, &regular, &bold);
        }
        if let Some(lines) = main_pages.get(page_index) {
            draw_column(&layer, lines, widths.main_x_mm, widths.main_mm, &regular, &bold);
        }
    }

    let file = File::create(out_path)?;
    pdf.save(&mut BufWriter::new(file))
        .map_err(|e| AppError::ExportRender(format!("pdf save: {e}")))?;

    Ok(page_count as u32)
}

fn builtin_fonts(face: FontFace) -> (BuiltinFont, BuiltinFont) {
    match face {
        FontFace::Helvetica => (BuiltinFont::Helvetica, BuiltinFont::HelveticaBold),
        FontFace::Times => (BuiltinFont::TimesRoman, BuiltinFont::TimesBold),
    }
}

fn draw_column(
    layer: &PdfLayerReference,
    lines: &[PdfLine],
    x_mm: f32,
    width_mm: f32,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    let mut y_mm = PAGE_HEIGHT_MM - MARGIN_MM;

    for line in lines {
        y_mm -= line.height_mm();

        if line.rule {
            let rule_y = y_mm + line.height_mm() * 0.5;
            layer.set_outline_thickness(0.5);
            layer.add_shape(printpdf::Line {
                points: vec![
                    (Point::new(Mm(x_mm.into()), Mm(rule_y.into())), false),
                    (Point::new(Mm((x_mm + width_mm).into()), Mm(rule_y.into())), false),
                ],
                is_closed: false,
                has_fill: false,
                has_stroke: true,
                is_clipping_path: false,
            });
        } else if !line.text.is_empty() {
            let font = if line.style.bold { bold } else { regular };
            layer.use_text(
                line.text.clone(),
                line.style.size_pt.into(),
                Mm((x_mm + line.indent_mm).into()),
                Mm(y_mm.into()),
                font,
            );
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
