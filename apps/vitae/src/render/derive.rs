//! Derived computations shared by every template.
//!
//! Templates differ only in arrangement; the data semantics (date display,
//! skill grouping) live here exactly once.

use chrono::NaiveDate;

use crate::models::{Experience, Skill};

/// Renders a `"YYYY-MM"` partial date as `"Mon YYYY"` (`"2023-05"` → `"May 2023"`).
///
/// Empty input renders empty. A value that does not parse as a partial date is
/// rendered verbatim rather than invented or dropped.
pub fn format_month(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }

    let parsed = NaiveDate::parse_from_str(&format!("{date}-01"), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date, "%Y-%m-%d"));

    match parsed {
        Ok(day) => day.format("%b %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Joins two formatted dates into a display range, omitting empty sides.
pub fn date_range(start: &str, end: &str) -> String {
    let start = format_month(start);
    let end = format_month(end);
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start,
        (true, false) => end,
        (false, false) => format!("{start} - {end}"),
    }
}

/// Date range for an experience entry. An ongoing role always ends in
/// `"Present"`, regardless of any stored end date.
pub fn experience_date_range(entry: &Experience) -> String {
    let start = format_month(&entry.start_date);
    let end = if entry.current {
        "Present".to_string()
    } else {
        format_month(&entry.end_date)
    };
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start,
        (true, false) => end,
        (false, false) => format!("{start} - {end}"),
    }
}

/// Partitions skills into `(category, members)` groups.
///
/// Stable group-by: categories appear in first-seen order, members keep their
/// original relative order. Nothing is sorted.
pub fn group_skills(skills: &[Skill]) -> Vec<(String, Vec<&Skill>)> {
    let mut groups: Vec<(String, Vec<&Skill>)> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|(cat, _)| *cat == skill.category) {
            Some((_, members)) => members.push(skill),
            None => groups.push((skill.category.clone(), vec![skill])),
        }
    }
    groups
}

/// One display line for a skill group: names joined, optionally with the 1–5
/// proficiency attached.
pub fn skill_group_line(members: &[&Skill], with_levels: bool) -> String {
    members
        .iter()
        .map(|s| {
            if with_levels {
                format!("{} ({}/5)", s.name, s.level)
            } else {
                s.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skill;

    fn skill(name: &str, category: &str) -> Skill {
        Skill {
            name: name.to_string(),
            category: category.to_string(),
            ..Skill::blank()
        }
    }

    // ── format_month ────────────────────────────────────────────────────────

    #[test]
    fn test_format_month_partial_date() {
        assert_eq!(format_month("2023-05"), "May 2023");
        assert_eq!(format_month("2024-01"), "Jan 2024");
        assert_eq!(format_month("2019-12"), "Dec 2019");
    }

    #[test]
    fn test_format_month_empty_is_empty() {
        assert_eq!(format_month(""), "");
    }

    #[test]
    fn test_format_month_full_date_accepted() {
        assert_eq!(format_month("2023-05-17"), "May 2023");
    }

    #[test]
    fn test_format_month_garbage_passes_through() {
        assert_eq!(format_month("soon"), "soon");
    }

    // ── date ranges ─────────────────────────────────────────────────────────

    #[test]
    fn test_date_range_omits_empty_sides() {
        assert_eq!(date_range("2023-05", "2024-02"), "May 2023 - Feb 2024");
        assert_eq!(date_range("2023-05", ""), "May 2023");
        assert_eq!(date_range("", ""), "");
    }

    #[test]
    fn test_current_experience_always_ends_present() {
        let entry = Experience {
            start_date: "2022-03".to_string(),
            end_date: "2024-01".to_string(),
            current: true,
            ..Experience::blank()
        };
        assert_eq!(experience_date_range(&entry), "Mar 2022 - Present");
    }

    #[test]
    fn test_finished_experience_uses_end_date() {
        let entry = Experience {
            start_date: "2022-03".to_string(),
            end_date: "2024-01".to_string(),
            current: false,
            ..Experience::blank()
        };
        assert_eq!(experience_date_range(&entry), "Mar 2022 - Jan 2024");
    }

    // ── skill grouping ──────────────────────────────────────────────────────

    #[test]
    fn test_group_skills_stable_and_order_preserving() {
        let skills = vec![skill("A", "X"), skill("B", "Y"), skill("C", "X")];
        let groups = group_skills(&skills);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "X");
        assert_eq!(
            groups[0].1.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["A", "C"]
        );
        assert_eq!(groups[1].0, "Y");
        assert_eq!(
            groups[1].1.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["B"]
        );
    }

    #[test]
    fn test_group_skills_empty_input() {
        assert!(group_skills(&[]).is_empty());
    }

    #[test]
    fn test_skill_group_line_with_levels() {
        let a = Skill {
            level: 4,
            ..skill("Rust", "Languages")
        };
        let b = Skill {
            level: 3,
            ..skill("Go", "Languages")
        };
        let members = vec![&a, &b];
        assert_eq!(skill_group_line(&members, true), "Rust (4/5), Go (3/5)");
        assert_eq!(skill_group_line(&members, false), "Rust, Go");
    }
}
