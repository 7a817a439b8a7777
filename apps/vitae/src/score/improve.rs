//! Mocked "AI improve" collaborator for experience bullet lines.
//!
//! Deliberately not a model: a fixed delay plus a deterministic string
//! transform, standing in for a future rewriting service behind the same
//! signature. Blank lines pass through untouched.

use std::time::Duration;

const IMPROVE_DELAY: Duration = Duration::from_secs(2);

/// Rewrites each non-blank bullet into the "enhanced" phrasing.
pub async fn improve_bullet_points(points: &[String]) -> Vec<String> {
    tokio::time::sleep(IMPROVE_DELAY).await;
    points.iter().map(|p| improve_line(p)).collect()
}

fn improve_line(point: &str) -> String {
    let trimmed = point.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return point.to_string();
    }
    format!(
        "Enhanced {} resulting in improved team efficiency and measurable business impact.",
        lowercase_first(trimmed)
    )
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
