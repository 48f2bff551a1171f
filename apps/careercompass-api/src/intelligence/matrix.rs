//! Competence matrix assembly and the user-skill boost.

use serde::{Deserialize, Serialize};

use crate::intelligence::content::{ArchetypeContent, MatrixSeed, BASELINE_MATRIX, SCALE_MAX};

/// Added to an entry's score when any user skill overlaps its subject.
pub const SKILL_BOOST: u32 = 20;

/// One axis of the radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetenceEntry {
    pub subject: String,
    pub score: u32,
    pub scale_max: u32,
}

/// Builds the 6-entry matrix: archetype-specific seeds, then the baseline.
///
/// `skills` must already be lower-cased. An entry is boosted once if its
/// lower-cased subject contains any skill or any skill contains the subject.
pub fn build_skill_matrix(content: &ArchetypeContent, skills: &[String]) -> Vec<CompetenceEntry> {
    content
        .specific_matrix
        .iter()
        .chain(BASELINE_MATRIX.iter())
        .map(|seed| boost_entry(seed, skills))
        .collect()
}

fn boost_entry(seed: &MatrixSeed, skills: &[String]) -> CompetenceEntry {
    let subject_lower = seed.subject.to_lowercase();
    let matched = skills
        .iter()
        .any(|skill| subject_lower.contains(skill.as_str()) || skill.contains(&subject_lower));

    let score = if matched {
        (seed.score + SKILL_BOOST).min(SCALE_MAX)
    } else {
        seed.score
    };

    CompetenceEntry {
        subject: seed.subject.to_string(),
        score,
        scale_max: SCALE_MAX,
    }
}
