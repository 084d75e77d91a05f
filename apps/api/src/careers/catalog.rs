//! Career role catalog and match derivations.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchLevel {
    High,
    Moderate,
    #[serde(rename = "Needs Preparation")]
    NeedsPreparation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerRole {
    pub slug: &'static str,
    pub title: &'static str,
    pub confidence: u32, // 0 – 100
    pub level: MatchLevel,
    pub description: &'static str,
    pub matching_skills: &'static [&'static str],
    pub missing_skills: &'static [&'static str],
}

impl CareerRole {
    /// Share of the role's skills the candidate already has, as a rounded percent.
    pub fn skill_coverage(&self) -> u32 {
        let have = self.matching_skills.len();
        let total = have + self.missing_skills.len();
        if total == 0 {
            return 0;
        }
        ((have as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Serialized form of a role, with derived fields attached.
#[derive(Debug, Clone, Serialize)]
pub struct RoleView {
    pub slug: &'static str,
    pub title: &'static str,
    pub confidence: u32,
    pub level: MatchLevel,
    pub description: &'static str,
    pub matching_skills: &'static [&'static str],
    pub missing_skills: &'static [&'static str],
    pub skill_coverage: u32,
}

impl From<&CareerRole> for RoleView {
    fn from(role: &CareerRole) -> Self {
        Self {
            slug: role.slug,
            title: role.title,
            confidence: role.confidence,
            level: role.level,
            description: role.description,
            matching_skills: role.matching_skills,
            missing_skills: role.missing_skills,
            skill_coverage: role.skill_coverage(),
        }
    }
}

const ROLES: &[CareerRole] = &[
    CareerRole {
        slug: "urban-data-analyst",
        title: "Urban Data Analyst",
        confidence: 92,
        level: MatchLevel::High,
        description: "Analyze city data to drive smarter urban planning decisions.",
        matching_skills: &["Data Analysis", "Python", "Statistics", "Problem Solving"],
        missing_skills: &["GIS Tools", "Urban Planning Basics"],
    },
    CareerRole {
        slug: "smart-mobility-analyst",
        title: "Smart Mobility Analyst",
        confidence: 78,
        level: MatchLevel::Moderate,
        description: "Optimize transportation systems for sustainable urban mobility.",
        matching_skills: &["Data Analysis", "Research", "Communication"],
        missing_skills: &["Transportation Planning", "Traffic Modeling", "IoT Basics"],
    },
    CareerRole {
        slug: "city-operations-analyst",
        title: "City Operations Analyst",
        confidence: 65,
        level: MatchLevel::NeedsPreparation,
        description: "Manage and improve city-wide operational efficiency.",
        matching_skills: &["Problem Solving", "Communication"],
        missing_skills: &["City Management", "Infrastructure Knowledge", "Policy Analysis"],
    },
];

/// All roles, highest confidence first.
pub fn ranked_roles() -> Vec<&'static CareerRole> {
    let mut roles: Vec<&CareerRole> = ROLES.iter().collect();
    roles.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    roles
}

pub fn top_match() -> Option<&'static CareerRole> {
    ranked_roles().into_iter().next()
}

pub fn find_role(slug: &str) -> Option<&'static CareerRole> {
    ROLES.iter().find(|r| r.slug.eq_ignore_ascii_case(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_roles_descending() {
        let roles = ranked_roles();
        assert_eq!(roles.len(), 3);
        assert!(roles
            .windows(2)
            .all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn test_top_match_is_urban_data_analyst() {
        let top = top_match().unwrap();
        assert_eq!(top.title, "Urban Data Analyst");
        assert_eq!(top.level, MatchLevel::High);
    }

    #[test]
    fn test_find_role_is_case_insensitive() {
        assert!(find_role("City-Operations-Analyst").is_some());
        assert!(find_role("astronaut").is_none());
    }

    #[test]
    fn test_skill_coverage() {
        // 4 matching, 2 missing → 67%
        assert_eq!(find_role("urban-data-analyst").unwrap().skill_coverage(), 67);
        // 2 matching, 3 missing → 40%
        assert_eq!(find_role("city-operations-analyst").unwrap().skill_coverage(), 40);
    }

    #[test]
    fn test_skill_coverage_empty_role_is_zero() {
        let role = CareerRole {
            slug: "empty",
            title: "Empty",
            confidence: 0,
            level: MatchLevel::NeedsPreparation,
            description: "",
            matching_skills: &[],
            missing_skills: &[],
        };
        assert_eq!(role.skill_coverage(), 0);
    }

    #[test]
    fn test_level_serializes_display_string() {
        let json = serde_json::to_string(&MatchLevel::NeedsPreparation).unwrap();
        assert_eq!(json, "\"Needs Preparation\"");
    }
}
