//! Title-driven skill suggestions for the profile editor.

struct SuggestionRule {
    title_keywords: &'static [&'static str],
    skills: &'static [&'static str],
}

/// Checked in order against the lower-cased title; first hit wins.
const SUGGESTION_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        title_keywords: &["bio", "gene"],
        skills: &["Genomics", "Bio-Informatics", "Python", "R"],
    },
    SuggestionRule {
        title_keywords: &["agri", "farm"],
        skills: &["Crop Systems", "IoT Sensors", "Sustainability", "Data Analysis"],
    },
    SuggestionRule {
        title_keywords: &["urban", "city"],
        skills: &["GIS", "Urban Planning", "AutoCAD", "Smart Grid"],
    },
    SuggestionRule {
        title_keywords: &["data", "soft", "dev", "engineer"],
        skills: &["React", "Node.js", "Python", "SQL", "System Design"],
    },
];

const FALLBACK_SUGGESTIONS: &[&str] = &[
    "Project Management",
    "Data Analysis",
    "Communication",
    "Technical Writing",
];

pub fn suggested_skills(title: &str) -> &'static [&'static str] {
    let title = title.to_lowercase();
    SUGGESTION_RULES
        .iter()
        .find(|rule| rule.title_keywords.iter().any(|kw| title.contains(kw)))
        .map(|rule| rule.skills)
        .unwrap_or(FALLBACK_SUGGESTIONS)
}
