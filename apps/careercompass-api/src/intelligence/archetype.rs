//! Archetype classification — ordered keyword rules over title and skills.
//!
//! Rules are evaluated top to bottom and the first hit wins. A profile that
//! mentions both "bio" and "urban" is always `Bio`; reordering the table
//! changes output for existing users.

use serde::{Deserialize, Serialize};

/// User persona inferred from title/skill keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Bio,
    Agri,
    Urban,
    Data,
    Generalist,
}

impl Archetype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Bio => "bio",
            Archetype::Agri => "agri",
            Archetype::Urban => "urban",
            Archetype::Data => "data",
            Archetype::Generalist => "generalist",
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the classification table.
///
/// Matches when the lower-cased title contains any `title_keywords` entry, or
/// when any lower-cased skill contains any `skill_keywords` entry.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeRule {
    pub archetype: Archetype,
    pub title_keywords: &'static [&'static str],
    pub skill_keywords: &'static [&'static str],
}

impl ArchetypeRule {
    /// Both inputs must already be lower-cased.
    pub fn matches(&self, title: &str, skills: &[String]) -> bool {
        let title_hit = self.title_keywords.iter().any(|kw| title.contains(kw));
        let skill_hit = skills
            .iter()
            .any(|skill| self.skill_keywords.iter().any(|kw| skill.contains(kw)));
        title_hit || skill_hit
    }
}

/// Classification table in precedence order. `Generalist` is the fallthrough.
pub const ARCHETYPE_RULES: &[ArchetypeRule] = &[
    ArchetypeRule {
        archetype: Archetype::Bio,
        title_keywords: &["bio"],
        skill_keywords: &["bio", "gene"],
    },
    ArchetypeRule {
        archetype: Archetype::Agri,
        title_keywords: &["agri", "farm"],
        skill_keywords: &["crop"],
    },
    ArchetypeRule {
        archetype: Archetype::Urban,
        title_keywords: &["urban", "city"],
        skill_keywords: &["gis"],
    },
    ArchetypeRule {
        archetype: Archetype::Data,
        title_keywords: &["data", "soft"],
        skill_keywords: &["python", "ai", "react", "node"],
    },
];

/// Resolves the archetype for a lower-cased title and lower-cased skills.
pub fn classify_archetype(title: &str, skills: &[String]) -> Archetype {
    ARCHETYPE_RULES
        .iter()
        .find(|rule| rule.matches(title, skills))
        .map(|rule| rule.archetype)
        .unwrap_or(Archetype::Generalist)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_input_is_generalist() {
        assert_eq!(classify_archetype("", &[]), Archetype::Generalist);
    }

    #[test]
    fn test_earliest_rule_wins_on_title() {
        assert_eq!(classify_archetype("bio urban", &[]), Archetype::Bio);
        assert_eq!(classify_archetype("city farm planner", &[]), Archetype::Agri);
    }

    #[test]
    fn test_skill_keyword_outranks_later_title_keyword() {
        // "data" in the title would be Data, but a "crop" skill hits Agri first.
        let result = classify_archetype("data analyst", &skills(&["crop rotation"]));
        assert_eq!(result, Archetype::Agri);
    }

    #[test]
    fn test_each_rule_matches_its_skill_keywords() {
        assert_eq!(classify_archetype("", &skills(&["genetics"])), Archetype::Bio);
        assert_eq!(classify_archetype("", &skills(&["cropwatch"])), Archetype::Agri);
        assert_eq!(classify_archetype("", &skills(&["arcgis"])), Archetype::Urban);
        assert_eq!(classify_archetype("", &skills(&["node.js"])), Archetype::Data);
    }

    #[test]
    fn test_ai_substring_matches_inside_other_words() {
        // "ai" is a raw substring check, so "maintenance" counts.
        assert_eq!(
            classify_archetype("technician", &skills(&["maintenance"])),
            Archetype::Data
        );
    }

    #[test]
    fn test_software_title_is_data() {
        assert_eq!(classify_archetype("software engineer", &[]), Archetype::Data);
    }

    #[test]
    fn test_unmatched_title_is_generalist() {
        assert_eq!(
            classify_archetype("marketing lead", &skills(&["copywriting"])),
            Archetype::Generalist
        );
    }

    #[test]
    fn test_rule_table_order() {
        let order: Vec<Archetype> = ARCHETYPE_RULES.iter().map(|r| r.archetype).collect();
        assert_eq!(
            order,
            vec![
                Archetype::Bio,
                Archetype::Agri,
                Archetype::Urban,
                Archetype::Data
            ]
        );
    }

    #[test]
    fn test_archetype_serializes_lowercase() {
        let json = serde_json::to_string(&Archetype::Generalist).unwrap();
        assert_eq!(json, "\"generalist\"");
        assert_eq!(Archetype::Urban.to_string(), "urban");
    }
}
