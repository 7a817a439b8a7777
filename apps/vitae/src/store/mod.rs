//! Resume Data Store — the single aggregate behind a closed mutation surface.
//!
//! All mutation flows through `ResumeStore::dispatch`: the pure reducer
//! computes the next state, and every successful transition triggers a
//! best-effort persistence write. Dispatch is synchronous and single-writer;
//! there is no concurrent-mutation hazard.

pub mod actions;
pub mod persistence;
pub mod reducer;

use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::ResumeData;

pub use actions::{
    Action, EducationPatch, ExperiencePatch, PersonalInfoPatch, ProjectPatch, SkillPatch,
};
pub use persistence::{StateFile, STATE_FILE_NAME};

/// Owns the aggregate and its durable copy.
pub struct ResumeStore {
    state: ResumeData,
    file: Option<StateFile>,
}

impl ResumeStore {
    /// Opens the store against a state file, hydrating from it when present.
    pub fn open(file: StateFile) -> Self {
        let state = file.load();
        Self {
            state,
            file: Some(file),
        }
    }

    /// A store with no durable backing. Used by tests and ephemeral sessions.
    pub fn in_memory() -> Self {
        Self {
            state: ResumeData::initial(),
            file: None,
        }
    }

    pub fn state(&self) -> &ResumeData {
        &self.state
    }

    /// Applies one action. On success the new state is swapped in and
    /// persisted fire-and-forget (a failed write is logged, not fatal — a
    /// crash loses at most the last change). `EntryNotFound` is logged as a
    /// warning, returned to the caller, and leaves state untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<(), AppError> {
        let name = action.name();
        match reducer::apply(&self.state, action) {
            Ok(next) => {
                debug!(action = name, "dispatch");
                self.state = next;
                self.persist();
                Ok(())
            }
            Err(err) => {
                warn!(action = name, "dispatch target missing: {err}");
                Err(err)
            }
        }
    }

    fn persist(&self) {
        if let Some(file) = &self.file {
            if let Err(err) = file.save(&self.state) {
                warn!("state persistence failed: {err}");
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Skill, TemplateId};
    use uuid::Uuid;

    #[test]
    fn test_dispatch_persists_every_transition() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ResumeStore::open(StateFile::new(dir.path()));

        store
            .dispatch(Action::UpdateSummary("persisted".to_string()))
            .unwrap();

        // A fresh store hydrates what the first one wrote.
        let reopened = ResumeStore::open(StateFile::new(dir.path()));
        assert_eq!(reopened.state().summary, "persisted");
    }

    #[test]
    fn test_hydration_falls_back_to_initial_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResumeStore::open(StateFile::new(dir.path()));
        assert_eq!(store.state(), &ResumeData::initial());
    }

    #[test]
    fn test_failed_dispatch_keeps_state_and_reports() {
        let mut store = ResumeStore::in_memory();
        let before = store.state().clone();

        let err = store.dispatch(Action::DeleteSkill(Uuid::new_v4())).unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_reset_after_mutations_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ResumeStore::open(StateFile::new(dir.path()));
        store.dispatch(Action::AddSkill(Skill::blank())).unwrap();
        store
            .dispatch(Action::SetTemplate(TemplateId::Executive))
            .unwrap();
        store.dispatch(Action::ResetData).unwrap();

        let reopened = ResumeStore::open(StateFile::new(dir.path()));
        assert_eq!(reopened.state(), &ResumeData::initial());
    }
}
