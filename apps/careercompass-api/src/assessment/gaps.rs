//! Skill-gap detection from quiz scores and 0–10 self-assessed levels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assessment::PASS_THRESHOLD;
use crate::catalog::proficiency::{Proficiency, MAX_SKILL_LEVEL};

/// Minimum level a gap ever asks for.
const REQUIRED_LEVEL_FLOOR: u8 = 5;
/// Levels above the current one a gap asks for.
const REQUIRED_LEVEL_STEP: u8 = 2;
/// How many gaps are named as top priorities.
const TOP_PRIORITY_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGap {
    pub skill_name: String,
    pub current_level: u8,
    pub required_level: u8,
    pub gap_level: u8,
    pub proficiency: Proficiency,
}

/// One completed quiz score (0–100) for a skill.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillScore {
    pub skill_name: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGapAnalysis {
    /// Distinct skills with at least one score.
    pub total_skills_assessed: usize,
    pub skill_gaps: Vec<SkillGap>,
    pub top_priority_skills: Vec<String>,
}

/// `min(10, max(current + 2, 5))`
pub fn required_level(current_level: u8) -> u8 {
    current_level
        .saturating_add(REQUIRED_LEVEL_STEP)
        .max(REQUIRED_LEVEL_FLOOR)
        .min(MAX_SKILL_LEVEL)
}

pub fn skill_gap(skill_name: &str, current_level: u8) -> SkillGap {
    let required = required_level(current_level);
    SkillGap {
        skill_name: skill_name.to_string(),
        current_level,
        required_level: required,
        gap_level: required.saturating_sub(current_level),
        proficiency: Proficiency::from_skill_level(current_level),
    }
}

/// Averages scores per skill (first-seen order) and reports a gap for every
/// skill averaging below the pass threshold. Unknown skills count as level 0.
/// Sorted by `gap_level` descending; ties keep first-seen order.
pub fn identify_skill_gaps(
    scores: &[SkillScore],
    skill_levels: &BTreeMap<String, u8>,
) -> Vec<SkillGap> {
    let mut gaps: Vec<SkillGap> = average_by_skill(scores)
        .into_iter()
        .filter(|(_, average)| *average < PASS_THRESHOLD)
        .map(|(skill, _)| skill_gap(skill, skill_levels.get(skill).copied().unwrap_or(0)))
        .collect();
    gaps.sort_by(|a, b| b.gap_level.cmp(&a.gap_level));
    gaps
}

pub fn analyze_skill_gaps(
    scores: &[SkillScore],
    skill_levels: &BTreeMap<String, u8>,
) -> SkillGapAnalysis {
    let skill_gaps = identify_skill_gaps(scores, skill_levels);
    let top_priority_skills = skill_gaps
        .iter()
        .take(TOP_PRIORITY_COUNT)
        .map(|gap| gap.skill_name.clone())
        .collect();

    SkillGapAnalysis {
        total_skills_assessed: average_by_skill(scores).len(),
        skill_gaps,
        top_priority_skills,
    }
}

fn average_by_skill(scores: &[SkillScore]) -> Vec<(&str, f64)> {
    let mut totals: Vec<(&str, f64, u32)> = Vec::new();
    for entry in scores {
        match totals.iter_mut().find(|(skill, _, _)| *skill == entry.skill_name) {
            Some((_, sum, count)) => {
                *sum += entry.score;
                *count += 1;
            }
            None => totals.push((entry.skill_name.as_str(), entry.score, 1)),
        }
    }
    totals
        .into_iter()
        .map(|(skill, sum, count)| (skill, sum / f64::from(count)))
        .collect()
}
