//! The closed action set — the only legal mutation surface of the store.
//!
//! Dynamic field-keyed patch objects from the client shell become typed patch
//! structs here: one optional field per editable field, shallow-merged by
//! `apply`. Anything the enum does not name cannot reach the reducer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Education, Experience, Project, ResumeData, Skill, TemplateId};

// ────────────────────────────────────────────────────────────────────────────
// Typed patches
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    pub address: Option<String>,
    pub photo: Option<String>,
}

impl PersonalInfoPatch {
    pub fn apply(self, target: &mut crate::models::PersonalInfo) {
        if let Some(v) = self.full_name {
            target.full_name = v;
        }
        if let Some(v) = self.email {
            target.email = v;
        }
        if let Some(v) = self.phone {
            target.phone = v;
        }
        if let Some(v) = self.linkedin {
            target.linkedin = v;
        }
        if let Some(v) = self.portfolio {
            target.portfolio = v;
        }
        if let Some(v) = self.address {
            target.address = v;
        }
        if let Some(v) = self.photo {
            target.photo = Some(v);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPatch {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub gpa: Option<String>,
}

impl EducationPatch {
    pub fn apply(self, target: &mut Education) {
        if let Some(v) = self.school {
            target.school = v;
        }
        if let Some(v) = self.degree {
            target.degree = v;
        }
        if let Some(v) = self.field {
            target.field = v;
        }
        if let Some(v) = self.start_date {
            target.start_date = v;
        }
        if let Some(v) = self.end_date {
            target.end_date = v;
        }
        if let Some(v) = self.description {
            target.description = v;
        }
        if let Some(v) = self.gpa {
            target.gpa = Some(v);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub bullet_points: Option<Vec<String>>,
    pub description: Option<String>,
}

impl ExperiencePatch {
    /// Shallow merge. The `current`/`end_date` invariant is NOT handled here;
    /// the reducer re-establishes it after every experience mutation.
    pub fn apply(self, target: &mut Experience) {
        if let Some(v) = self.company {
            target.company = v;
        }
        if let Some(v) = self.position {
            target.position = v;
        }
        if let Some(v) = self.start_date {
            target.start_date = v;
        }
        if let Some(v) = self.end_date {
            target.end_date = v;
        }
        if let Some(v) = self.current {
            target.current = v;
        }
        if let Some(v) = self.bullet_points {
            target.bullet_points = v;
        }
        if let Some(v) = self.description {
            target.description = v;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<u8>,
    pub category: Option<String>,
}

impl SkillPatch {
    pub fn apply(self, target: &mut Skill) {
        if let Some(v) = self.name {
            target.name = v;
        }
        if let Some(v) = self.level {
            target.level = v;
        }
        if let Some(v) = self.category {
            target.category = v;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ProjectPatch {
    pub fn apply(self, target: &mut Project) {
        if let Some(v) = self.title {
            target.title = v;
        }
        if let Some(v) = self.description {
            target.description = v;
        }
        if let Some(v) = self.technologies {
            target.technologies = v;
        }
        if let Some(v) = self.link {
            target.link = Some(v);
        }
        if let Some(v) = self.github {
            target.github = Some(v);
        }
        if let Some(v) = self.start_date {
            target.start_date = v;
        }
        if let Some(v) = self.end_date {
            target.end_date = v;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Actions
// ────────────────────────────────────────────────────────────────────────────

/// A typed, named intent to mutate the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    UpdatePersonalInfo(PersonalInfoPatch),
    UpdateSummary(String),

    AddEducation(Education),
    UpdateEducation { id: Uuid, patch: EducationPatch },
    DeleteEducation(Uuid),

    AddExperience(Experience),
    UpdateExperience { id: Uuid, patch: ExperiencePatch },
    DeleteExperience(Uuid),

    AddSkill(Skill),
    UpdateSkill { id: Uuid, patch: SkillPatch },
    DeleteSkill(Uuid),

    AddProject(Project),
    UpdateProject { id: Uuid, patch: ProjectPatch },
    DeleteProject(Uuid),

    SetTemplate(TemplateId),
    /// Wholesale replace; used for hydration from the state file.
    LoadData(Box<ResumeData>),
    ResetData,
}

impl Action {
    /// Action name for dispatch logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::UpdatePersonalInfo(_) => "UPDATE_PERSONAL_INFO",
            Action::UpdateSummary(_) => "UPDATE_SUMMARY",
            Action::AddEducation(_) => "ADD_EDUCATION",
            Action::UpdateEducation { .. } => "UPDATE_EDUCATION",
            Action::DeleteEducation(_) => "DELETE_EDUCATION",
            Action::AddExperience(_) => "ADD_EXPERIENCE",
            Action::UpdateExperience { .. } => "UPDATE_EXPERIENCE",
            Action::DeleteExperience(_) => "DELETE_EXPERIENCE",
            Action::AddSkill(_) => "ADD_SKILL",
            Action::UpdateSkill { .. } => "UPDATE_SKILL",
            Action::DeleteSkill(_) => "DELETE_SKILL",
            Action::AddProject(_) => "ADD_PROJECT",
            Action::UpdateProject { .. } => "UPDATE_PROJECT",
            Action::DeleteProject(_) => "DELETE_PROJECT",
            Action::SetTemplate(_) => "SET_TEMPLATE",
            Action::LoadData(_) => "LOAD_DATA",
            Action::ResetData => "RESET_DATA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonalInfo;

    #[test]
    fn test_patch_merges_only_named_fields() {
        let mut info = PersonalInfo {
            full_name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            ..PersonalInfo::default()
        };
        PersonalInfoPatch {
            phone: Some("555-0100".to_string()),
            ..PersonalInfoPatch::default()
        }
        .apply(&mut info);

        assert_eq!(info.full_name, "Jane");
        assert_eq!(info.email, "jane@example.com");
        assert_eq!(info.phone, "555-0100");
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let mut edu = Education::blank();
        edu.school = "MIT".to_string();
        let before = edu.clone();
        EducationPatch::default().apply(&mut edu);
        assert_eq!(edu, before);
    }

    #[test]
    fn test_action_serde_uses_original_tag_names() {
        let json = serde_json::to_string(&Action::UpdateSummary("hi".to_string())).unwrap();
        assert!(json.contains("\"UPDATE_SUMMARY\""));
        let json = serde_json::to_string(&Action::ResetData).unwrap();
        assert!(json.contains("\"RESET_DATA\""));
    }
}
