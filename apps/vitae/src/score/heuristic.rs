//! Local deterministic scorer — fixed point buckets, no network.
//!
//! # Buckets
//! - contact info present (email or phone): +10
//! - any experience: +25, and +10 bonus at 3 or more entries
//! - any education: +20
//! - any skills: +20
//! - template-role fit: +10 when the selected template's emphasized section
//!   is populated, −10 when it is empty
//!
//! The final score is clamped to [0, 100]; an empty resume scores 0.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::ResumeData;
use crate::render::templates::layout_for;
use crate::render::tree::SectionKind;
use crate::score::{ResumeScorer, ScoreReport};

const CONTACT_POINTS: i32 = 10;
const EXPERIENCE_POINTS: i32 = 25;
const EXPERIENCE_BONUS: i32 = 10;
const EXPERIENCE_BONUS_THRESHOLD: usize = 3;
const EDUCATION_POINTS: i32 = 20;
const SKILLS_POINTS: i32 = 20;
const TEMPLATE_FIT_POINTS: i32 = 10;

pub struct HeuristicScorer;

#[async_trait]
impl ResumeScorer for HeuristicScorer {
    async fn score(&self, resume: &ResumeData) -> Result<ScoreReport, AppError> {
        Ok(compute_score(resume))
    }
}

/// Pure scoring function; the trait impl is a thin wrapper.
pub fn compute_score(resume: &ResumeData) -> ScoreReport {
    let mut points = 0_i32;
    let mut missing = Vec::new();

    let has_contact =
        !resume.personal_info.email.is_empty() || !resume.personal_info.phone.is_empty();
    if has_contact {
        points += CONTACT_POINTS;
    } else {
        missing.push("contact info".to_string());
    }

    if resume.experience.is_empty() {
        missing.push("experience".to_string());
    } else {
        points += EXPERIENCE_POINTS;
        if resume.experience.len() >= EXPERIENCE_BONUS_THRESHOLD {
            points += EXPERIENCE_BONUS;
        }
    }

    if resume.education.is_empty() {
        missing.push("education".to_string());
    } else {
        points += EDUCATION_POINTS;
    }

    if resume.skills.is_empty() {
        missing.push("skills".to_string());
    } else {
        points += SKILLS_POINTS;
    }

    points += template_fit_adjustment(resume);

    let score = points.clamp(0, 100) as u32;
    ScoreReport {
        score,
        feedback: Some(build_feedback(score, &missing)),
        missing,
    }
}

/// ±10 depending on whether the selected template's emphasized section holds
/// content. An executive layout with no experience reads worse than a plain
/// one; a project-led creative layout needs projects to lead with.
fn template_fit_adjustment(resume: &ResumeData) -> i32 {
    let emphasized_populated = match layout_for(resume.selected_template).emphasis {
        SectionKind::Summary => !resume.summary.is_empty(),
        SectionKind::Experience => !resume.experience.is_empty(),
        SectionKind::Education => !resume.education.is_empty(),
        SectionKind::Skills => !resume.skills.is_empty(),
        SectionKind::Projects => !resume.projects.is_empty(),
    };
    if emphasized_populated {
        TEMPLATE_FIT_POINTS
    } else {
        -TEMPLATE_FIT_POINTS
    }
}

fn build_feedback(score: u32, missing: &[String]) -> String {
    if score >= 85 {
        "Your resume covers the essentials well.".to_string()
    } else if missing.is_empty() {
        "Solid foundation. Flesh out your strongest sections with more detail.".to_string()
    } else {
        format!("Consider adding: {}.", missing.join(", "))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
