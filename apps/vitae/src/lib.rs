//! Vitae — a client-resident resume-building core.
//!
//! Two cooperating subsystems:
//!
//! 1. **Resume data store** (`store`): a single [`models::ResumeData`]
//!    aggregate mutated exclusively through the closed [`store::Action`] set,
//!    persisted to a local JSON state file on every change.
//! 2. **Rendering & export pipeline** (`render`, `export`): a pure function
//!    from the aggregate to a template-shaped document tree, plus a vector
//!    PDF writer that paginates that tree onto A4 pages.
//!
//! Scoring (`score`) sits at the side as a pluggable collaborator: a local
//! deterministic heuristic by default, or a remote HTTP endpoint with
//! automatic retry. [`app::ResumeApp`] composes the pieces for an embedding
//! UI shell; there is deliberately no CLI or server here.

pub mod app;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod render;
pub mod score;
pub mod store;

pub use app::{init_logging, ResumeApp};
pub use config::Config;
pub use errors::AppError;
pub use export::{export_file_name, Exporter, PreviewSource, SharedPreview};
pub use models::{ResumeData, TemplateId};
pub use render::render;
pub use score::{HeuristicScorer, RemoteScorer, ResumeScorer, ScoreReport};
pub use store::{Action, ResumeStore, StateFile};
