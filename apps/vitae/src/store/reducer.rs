//! The pure transition function `(state, action) -> state`.
//!
//! Never mutates in place: every action computes a new `ResumeData` from the
//! old one. Mutate-by-id on an absent id returns `AppError::EntryNotFound`
//! with the input state untouched, so a desynced shell is detectable instead
//! of silently absorbed. The `current`/`end_date` invariant is enforced here,
//! on every path that can set either field.

use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Education, Experience, Project, ResumeData, Skill};
use crate::store::actions::Action;

/// Entities addressable by id within the aggregate's lists.
trait ListEntry {
    const ENTITY: &'static str;
    fn id(&self) -> Uuid;
}

impl ListEntry for Education {
    const ENTITY: &'static str = "education";
    fn id(&self) -> Uuid {
        self.id
    }
}

impl ListEntry for Experience {
    const ENTITY: &'static str = "experience";
    fn id(&self) -> Uuid {
        self.id
    }
}

impl ListEntry for Skill {
    const ENTITY: &'static str = "skill";
    fn id(&self) -> Uuid {
        self.id
    }
}

impl ListEntry for Project {
    const ENTITY: &'static str = "project";
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Applies an action to a snapshot of the aggregate, returning the new state.
///
/// `Err(EntryNotFound)` means the state is unchanged; callers keep their
/// existing snapshot.
pub fn apply(state: &ResumeData, action: Action) -> Result<ResumeData, AppError> {
    let mut next = state.clone();

    match action {
        Action::UpdatePersonalInfo(patch) => patch.apply(&mut next.personal_info),
        Action::UpdateSummary(summary) => next.summary = summary,

        Action::AddEducation(entry) => next.education.push(entry),
        Action::UpdateEducation { id, patch } => {
            let entry = find_mut(&mut next.education, id)?;
            patch.apply(entry);
        }
        Action::DeleteEducation(id) => remove(&mut next.education, id)?,

        Action::AddExperience(mut entry) => {
            enforce_current(&mut entry);
            next.experience.push(entry);
        }
        Action::UpdateExperience { id, patch } => {
            let entry = find_mut(&mut next.experience, id)?;
            patch.apply(entry);
            enforce_current(entry);
        }
        Action::DeleteExperience(id) => remove(&mut next.experience, id)?,

        Action::AddSkill(entry) => next.skills.push(entry),
        Action::UpdateSkill { id, patch } => {
            let entry = find_mut(&mut next.skills, id)?;
            patch.apply(entry);
        }
        Action::DeleteSkill(id) => remove(&mut next.skills, id)?,

        Action::AddProject(entry) => next.projects.push(entry),
        Action::UpdateProject { id, patch } => {
            let entry = find_mut(&mut next.projects, id)?;
            patch.apply(entry);
        }
        Action::DeleteProject(id) => remove(&mut next.projects, id)?,

        Action::SetTemplate(template) => next.selected_template = template,
        Action::LoadData(data) => next = *data,
        Action::ResetData => next = ResumeData::initial(),
    }

    Ok(next)
}

/// An ongoing role has no end date. Single source of truth for the invariant.
fn enforce_current(entry: &mut Experience) {
    if entry.current {
        entry.end_date.clear();
    }
}

fn find_mut<T: ListEntry>(list: &mut [T], id: Uuid) -> Result<&mut T, AppError> {
    list.iter_mut()
        .find(|e| e.id() == id)
        .ok_or(AppError::EntryNotFound {
            entity: T::ENTITY,
            id,
        })
}

fn remove<T: ListEntry>(list: &mut Vec<T>, id: Uuid) -> Result<(), AppError> {
    let before = list.len();
    list.retain(|e| e.id() != id);
    if list.len() == before {
        return Err(AppError::EntryNotFound {
            entity: T::ENTITY,
            id,
        });
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
