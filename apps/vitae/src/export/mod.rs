//! Export pipeline — turns the current rendered preview into a downloadable
//! paginated PDF.
//!
//! Export is a read-only side effect on a snapshot of the rendered state: it
//! waits for the shell's preview slot to hold a non-empty document (bounded
//! polling, not an unbounded loop), writes the file, and reports any failure
//! as a user-facing status without ever touching the aggregate.

pub mod metrics;
pub mod pdf;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::render::tree::RenderedDocument;

pub use pdf::write_pdf;

/// Bounded retry budget while waiting for the preview to appear.
pub const PREVIEW_RETRY_ATTEMPTS: u32 = 10;
pub const PREVIEW_RETRY_DELAY: Duration = Duration::from_millis(300);

// ────────────────────────────────────────────────────────────────────────────
// Preview slot
// ────────────────────────────────────────────────────────────────────────────

/// Where the exporter finds the currently rendered document. The shell (or
/// `ResumeApp`) publishes a fresh tree after every state change.
pub trait PreviewSource: Send + Sync {
    /// The current rendered document, if one has been published.
    fn current(&self) -> Option<RenderedDocument>;
}

/// Shared preview slot: cheap to clone, written by the dispatch path, read by
/// the exporter.
#[derive(Clone, Default)]
pub struct SharedPreview {
    slot: Arc<RwLock<Option<RenderedDocument>>>,
}

impl SharedPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, doc: RenderedDocument) {
        *self.slot.write().expect("preview lock poisoned") = Some(doc);
    }

    pub fn clear(&self) {
        *self.slot.write().expect("preview lock poisoned") = None;
    }
}

impl PreviewSource for SharedPreview {
    fn current(&self) -> Option<RenderedDocument> {
        self.slot.read().expect("preview lock poisoned").clone()
    }
}

/// Polls the preview slot until it holds a document with rendered content.
///
/// An empty document counts as not-ready (it would export to a blank page);
/// exhausting the budget is the retryable preview-not-found failure.
pub async fn wait_for_preview(
    source: &dyn PreviewSource,
    attempts: u32,
    delay: Duration,
) -> Result<RenderedDocument, AppError> {
    for attempt in 0..attempts {
        if let Some(doc) = source.current() {
            if !doc.is_empty() {
                return Ok(doc);
            }
        }
        if attempt + 1 < attempts {
            tokio::time::sleep(delay).await;
        }
    }
    Err(AppError::PreviewNotFound { attempts })
}

// ────────────────────────────────────────────────────────────────────────────
// Filename derivation
// ────────────────────────────────────────────────────────────────────────────

/// Derives the download filename from the user's full name: whitespace runs
/// collapse to underscores, suffixed `_Resume.pdf`; blank names fall back to
/// `Resume.pdf`.
pub fn export_file_name(full_name: &str) -> String {
    let joined = full_name.split_whitespace().collect::<Vec<_>>().join("_");
    if joined.is_empty() {
        "Resume.pdf".to_string()
    } else {
        format!("{joined}_Resume.pdf")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Exporter
// ────────────────────────────────────────────────────────────────────────────

/// One export at a time: the in-flight flag rejects re-entrant triggers while
/// a previous export is still running.
#[derive(Default)]
pub struct Exporter {
    in_flight: AtomicBool,
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exports the current preview into `out_dir`, returning the written path.
    pub async fn export(
        &self,
        preview: &dyn PreviewSource,
        out_dir: &Path,
    ) -> Result<PathBuf, AppError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(AppError::ExportInFlight);
        }
        let result = self.export_inner(preview, out_dir).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match &result {
            Ok(path) => info!("exported resume to {}", path.display()),
            Err(err) => warn!("export failed: {err}"),
        }
        result
    }

    async fn export_inner(
        &self,
        preview: &dyn PreviewSource,
        out_dir: &Path,
    ) -> Result<PathBuf, AppError> {
        let doc =
            wait_for_preview(preview, PREVIEW_RETRY_ATTEMPTS, PREVIEW_RETRY_DELAY).await?;

        std::fs::create_dir_all(out_dir)?;
        let path = out_dir.join(export_file_name(&doc.header.name));
        let pages = pdf::write_pdf(&doc, &path)?;
        info!(pages, "wrote {}", path.display());
        Ok(path)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
