use thiserror::Error;
use uuid::Uuid;

/// Application-level error type.
///
/// Every async boundary (export, scoring) catches these and converts them to
/// user-facing status via `code()` / `user_message()`; nothing here is allowed
/// to escape as an unhandled failure. Reducer-level operations never construct
/// anything beyond `EntryNotFound`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Mutate-by-id on an absent id. The store logs this as a warning and
    /// leaves state untouched; callers may use it to detect a UI/state desync.
    #[error("{entity} entry not found: {id}")]
    EntryNotFound { entity: &'static str, id: Uuid },

    /// State file read/write failure. Logged, never fatal; reads fall back to
    /// the empty aggregate.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// The rendered preview never became available within the retry budget.
    #[error("Resume preview not available after {attempts} attempts")]
    PreviewNotFound { attempts: u32 },

    /// Document assembly or file write failed during export.
    #[error("Export failed: {0}")]
    ExportRender(String),

    /// An export is already running; re-entrant triggers are rejected.
    #[error("An export is already in progress")]
    ExportInFlight,

    /// Transport-level scoring failure (no connection, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The scoring collaborator answered with a non-2xx status.
    #[error("Scoring server error (status {status})")]
    Server { status: u16 },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code for telemetry and shell-side mapping.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::EntryNotFound { .. } => "NOT_FOUND",
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
            AppError::PreviewNotFound { .. } => "PREVIEW_NOT_FOUND",
            AppError::ExportRender(_) => "EXPORT_ERROR",
            AppError::ExportInFlight => "EXPORT_IN_FLIGHT",
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::Server { .. } => "SERVER_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Short user-facing message for the shell's transient notifications.
    /// Network and server failures get distinct wording so the shell can show
    /// the matching affordance (check connection vs try again later).
    pub fn user_message(&self) -> String {
        match self {
            AppError::EntryNotFound { .. } => "That entry no longer exists.".to_string(),
            AppError::Persistence(_) => {
                "Your changes could not be saved to disk.".to_string()
            }
            AppError::PreviewNotFound { .. } => {
                "The resume preview is not ready yet. Please try again.".to_string()
            }
            AppError::ExportRender(_) => "Failed to generate the PDF.".to_string(),
            AppError::ExportInFlight => "An export is already running.".to_string(),
            AppError::Network(_) => {
                "No internet connection. Please check your connection and try again.".to_string()
            }
            AppError::Server { .. } => {
                "Our servers are busy. Please try again in a few moments.".to_string()
            }
            AppError::Internal(_) => "Something went wrong.".to_string(),
        }
    }

    /// True for failures the shell should offer a retry affordance for.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::PreviewNotFound { .. }
                | AppError::Network(_)
                | AppError::Server { .. }
                | AppError::ExportInFlight
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}
