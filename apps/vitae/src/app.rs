//! Composition root — wires the store, preview slot, exporter, and scorer
//! into the single object an embedding shell holds.
//!
//! Data flow: the shell dispatches actions → the store computes the next
//! state and persists it → the app re-renders the selected template into the
//! shared preview slot → export and scoring read that snapshot. Dispatch is
//! synchronous; export and scoring are the only async boundaries.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;
use crate::export::{Exporter, SharedPreview};
use crate::models::ResumeData;
use crate::render::render;
use crate::score::{HeuristicScorer, RemoteScorer, ResumeScorer, ScoreReport};
use crate::store::{Action, ResumeStore, StateFile};

pub struct ResumeApp {
    config: Config,
    store: ResumeStore,
    preview: SharedPreview,
    exporter: Exporter,
    scorer: Arc<dyn ResumeScorer>,
}

impl ResumeApp {
    /// Opens the app: hydrates the store from the state file (empty aggregate
    /// when absent or unreadable) and publishes the initial preview. The
    /// scorer backend follows the config: remote when an endpoint is set,
    /// local heuristic otherwise.
    pub fn bootstrap(config: Config) -> Self {
        let store = ResumeStore::open(StateFile::new(&config.data_dir));

        let scorer: Arc<dyn ResumeScorer> = match &config.score_endpoint {
            Some(endpoint) => {
                info!("scoring via remote collaborator at {endpoint}");
                Arc::new(RemoteScorer::with_timeout(
                    endpoint.clone(),
                    config.score_timeout_secs,
                ))
            }
            None => Arc::new(HeuristicScorer),
        };

        let preview = SharedPreview::new();
        preview.publish(render(store.state()));

        Self {
            config,
            store,
            preview,
            exporter: Exporter::new(),
            scorer,
        }
    }

    /// Swaps the scorer backend; used by shells that provide their own.
    pub fn with_scorer(mut self, scorer: Arc<dyn ResumeScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn state(&self) -> &ResumeData {
        self.store.state()
    }

    /// The preview slot the shell renders from (and the exporter reads).
    pub fn preview(&self) -> &SharedPreview {
        &self.preview
    }

    /// Applies one action and republishes the preview on success.
    pub fn dispatch(&mut self, action: Action) -> Result<(), AppError> {
        self.store.dispatch(action)?;
        self.preview.publish(render(self.store.state()));
        Ok(())
    }

    /// Exports the current preview as a PDF into the configured export
    /// directory. Read-only with respect to the aggregate.
    pub async fn export_pdf(&self) -> Result<PathBuf, AppError> {
        self.exporter.export(&self.preview, &self.config.export_dir).await
    }

    /// One scoring round against the current state snapshot.
    pub async fn score(&self) -> Result<ScoreReport, AppError> {
        self.scorer.score(self.store.state()).await
    }

    pub fn scorer(&self) -> Arc<dyn ResumeScorer> {
        Arc::clone(&self.scorer)
    }
}

/// Installs the structured logging stack. Call once from the shell's entry
/// point; `RUST_LOG` overrides the passed default filter.
pub fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter.to_string())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::PreviewSource;
    use crate::models::{Experience, TemplateId};
    use crate::store::ExperiencePatch;

    fn test_config(dir: &std::path::Path) -> Config {
        Config {
            data_dir: dir.to_path_buf(),
            export_dir: dir.join("exports"),
            score_endpoint: None,
            score_timeout_secs: 5,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_dispatch_updates_preview() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = ResumeApp::bootstrap(test_config(dir.path()));

        assert!(app.preview().current().unwrap().is_empty());

        app.dispatch(Action::AddExperience(Experience {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            ..Experience::blank()
        }))
        .unwrap();

        let doc = app.preview().current().unwrap();
        assert!(!doc.is_empty());
        assert_eq!(doc.template, TemplateId::Modern);
    }

    #[test]
    fn test_bootstrap_hydrates_previous_session() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut app = ResumeApp::bootstrap(test_config(dir.path()));
            app.dispatch(Action::UpdateSummary("kept".to_string())).unwrap();
        }
        let app = ResumeApp::bootstrap(test_config(dir.path()));
        assert_eq!(app.state().summary, "kept");
    }

    #[test]
    fn test_failed_dispatch_leaves_preview_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = ResumeApp::bootstrap(test_config(dir.path()));
        let before = app.preview().current();

        let result = app.dispatch(Action::UpdateExperience {
            id: uuid::Uuid::new_v4(),
            patch: ExperiencePatch::default(),
        });
        assert!(result.is_err());
        assert_eq!(app.preview().current(), before);
    }

    #[tokio::test]
    async fn test_export_is_read_only_on_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = ResumeApp::bootstrap(test_config(dir.path()));
        app.dispatch(Action::AddExperience(Experience {
            company: "Acme".to_string(),
            ..Experience::blank()
        }))
        .unwrap();

        let before = app.state().clone();
        let path = app.export_pdf().await.unwrap();
        assert!(path.exists());
        assert_eq!(app.state(), &before);
    }

    #[tokio::test]
    async fn test_default_scorer_is_local_heuristic() {
        let dir = tempfile::tempdir().unwrap();
        let app = ResumeApp::bootstrap(test_config(dir.path()));
        // Empty resume scores 0 through the heuristic, no network involved.
        let report = app.score().await.unwrap();
        assert_eq!(report.score, 0);
    }
}
