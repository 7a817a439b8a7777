//! The resume aggregate and its child entities.
//!
//! `ResumeData` is the single root document: one instance per session, owned
//! exclusively by the store, mutated only through dispatched actions. Field
//! names serialize in camelCase so the persisted blob matches the shape the
//! client shell reads and writes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Template identifiers
// ────────────────────────────────────────────────────────────────────────────

/// The eight visual template variants. Serialized in kebab-case
/// (`"two-column"`), matching the persisted `selectedTemplate` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Creative,
    Minimalist,
    Executive,
    Professional,
    Compact,
    TwoColumn,
}

impl TemplateId {
    pub const ALL: [TemplateId; 8] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Creative,
        TemplateId::Minimalist,
        TemplateId::Executive,
        TemplateId::Professional,
        TemplateId::Compact,
        TemplateId::TwoColumn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Creative => "creative",
            TemplateId::Minimalist => "minimalist",
            TemplateId::Executive => "executive",
            TemplateId::Professional => "professional",
            TemplateId::Compact => "compact",
            TemplateId::TwoColumn => "two-column",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entities
// ────────────────────────────────────────────────────────────────────────────

/// Flat contact record. All fields optional by convention; name and email are
/// expected but not enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub portfolio: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field: String,
    /// Partial date, `"YYYY-MM"`.
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

impl Education {
    /// A blank entry with a fresh id, as created by the "add" affordance.
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            school: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
            gpa: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    /// Ongoing role. When true the reducer keeps `end_date` cleared; renderers
    /// show "Present" regardless of any stored value.
    pub current: bool,
    /// One free-text achievement line per element.
    pub bullet_points: Vec<String>,
    pub description: String,
}

impl Experience {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            bullet_points: Vec::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    /// Proficiency, 1–5.
    pub level: u8,
    /// Free-text category label; grouping preserves first-seen order.
    pub category: String,
}

impl Skill {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            level: 3,
            category: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Ordered free-text tags, derived from a comma-separated input string.
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    pub start_date: String,
    pub end_date: String,
}

impl Project {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            link: None,
            github: None,
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

/// Splits a comma-separated technologies input into trimmed, non-empty tags.
///
/// `"Rust, tokio,,  serde "` → `["Rust", "tokio", "serde"]`.
pub fn parse_technologies(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Root aggregate
// ────────────────────────────────────────────────────────────────────────────

/// The root aggregate: all resume content plus the selected template.
///
/// Created empty on first load, hydrated from the state file when present,
/// replaced wholesale on reset. The store serializes it after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub selected_template: TemplateId,
}

impl ResumeData {
    /// The empty initial aggregate (what `ResetData` restores).
    pub fn initial() -> Self {
        Self::default()
    }

    /// True when no section holds any content and contact info is blank.
    pub fn is_blank(&self) -> bool {
        self.personal_info == PersonalInfo::default()
            && self.summary.is_empty()
            && self.education.is_empty()
            && self.experience.is_empty()
            && self.skills.is_empty()
            && self.projects.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_resume() -> ResumeData {
        let mut data = ResumeData::initial();
        data.personal_info.full_name = "Jane Q. Public".to_string();
        data.personal_info.email = "jane@example.com".to_string();
        data.summary = "Systems engineer with a storage background.".to_string();
        data.education.push(Education {
            school: "MIT".to_string(),
            degree: "B.S.".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2015-09".to_string(),
            end_date: "2019-06".to_string(),
            gpa: Some("3.9".to_string()),
            ..Education::blank()
        });
        data.experience.push(Experience {
            company: "Acme".to_string(),
            position: "Senior Engineer".to_string(),
            start_date: "2019-07".to_string(),
            current: true,
            bullet_points: vec!["Cut p99 latency by 40%".to_string()],
            ..Experience::blank()
        });
        data.skills.push(Skill {
            name: "Rust".to_string(),
            level: 5,
            category: "Languages".to_string(),
            ..Skill::blank()
        });
        data.projects.push(Project {
            title: "cachegrindr".to_string(),
            technologies: parse_technologies("Rust, tokio"),
            ..Project::blank()
        });
        data.selected_template = TemplateId::TwoColumn;
        data
    }

    #[test]
    fn test_serde_round_trip_preserves_aggregate() {
        let data = populated_resume();
        let json = serde_json::to_string(&data).unwrap();
        let back: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_serde_uses_camel_case_and_kebab_template() {
        let json = serde_json::to_string(&populated_resume()).unwrap();
        assert!(json.contains("\"personalInfo\""));
        assert!(json.contains("\"fullName\""));
        assert!(json.contains("\"bulletPoints\""));
        assert!(json.contains("\"selectedTemplate\":\"two-column\""));
    }

    #[test]
    fn test_parse_technologies_trims_and_drops_empties() {
        assert_eq!(
            parse_technologies("Rust, tokio,,  serde "),
            vec!["Rust", "tokio", "serde"]
        );
        assert!(parse_technologies("").is_empty());
        assert!(parse_technologies(" , ,").is_empty());
    }

    #[test]
    fn test_blank_entries_get_unique_ids() {
        assert_ne!(Education::blank().id, Education::blank().id);
        assert_ne!(Skill::blank().id, Skill::blank().id);
    }

    #[test]
    fn test_initial_aggregate_is_blank_modern() {
        let data = ResumeData::initial();
        assert!(data.is_blank());
        assert_eq!(data.selected_template, TemplateId::Modern);
    }

    #[test]
    fn test_template_id_all_distinct_strings() {
        let mut names: Vec<&str> = TemplateId::ALL.iter().map(|t| t.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);
    }
}
