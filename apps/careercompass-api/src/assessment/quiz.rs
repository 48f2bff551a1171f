//! Quiz grading: answer checking, performance bands, and follow-up advice.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::assessment::gaps::{skill_gap, SkillGap};
use crate::assessment::question_bank::{BankQuestion, Difficulty};
use crate::assessment::PASS_THRESHOLD;

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerSubmission {
    pub question_id: String,
    pub selected_option_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Performance {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Review Required")]
    ReviewRequired,
}

impl Performance {
    /// Bands: `>= 80`, `>= 60`, `>= 40`, below.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Performance::Excellent
        } else if score >= 60.0 {
            Performance::Good
        } else if score >= 40.0 {
            Performance::NeedsImprovement
        } else {
            Performance::ReviewRequired
        }
    }

    pub fn strength_areas(self) -> &'static [&'static str] {
        match self {
            Performance::Excellent => &["Most topics", "Key concepts", "Practical application"],
            Performance::Good => &["Core concepts", "Basic understanding"],
            Performance::NeedsImprovement => &["Basic understanding"],
            Performance::ReviewRequired => &[],
        }
    }

    pub fn weak_areas(self) -> &'static [&'static str] {
        match self {
            Performance::Excellent => &[],
            Performance::Good => &["Advanced topics", "Edge cases"],
            Performance::NeedsImprovement => {
                &["Core concepts", "Practical application", "Advanced topics"]
            }
            Performance::ReviewRequired => &["All major topics", "Fundamentals", "Core concepts"],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResult {
    pub skill_name: String,
    pub difficulty_level: Difficulty,
    /// Percentage, 0–100.
    pub score: f64,
    pub passed: bool,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    pub performance_summary: Performance,
    pub strength_areas: Vec<String>,
    pub weak_areas: Vec<String>,
    pub recommended_topics: Vec<String>,
    pub next_steps: Vec<String>,
    /// Present when the score is below the pass mark.
    pub skill_gap: Option<SkillGap>,
}

/// Next steps are banded at 80 and 60, independent of `Performance`.
pub fn next_steps(score: f64) -> &'static [&'static str] {
    if score >= 80.0 {
        &[
            "Try the next difficulty level",
            "Take another quiz on a different skill",
            "Work on a project using this skill",
        ]
    } else if score >= 60.0 {
        &[
            "Review weak areas",
            "Take practice quiz again",
            "Study recommended resources",
        ]
    } else {
        &[
            "Review fundamentals carefully",
            "Take beginner level quiz first",
            "Seek mentorship on this skill",
        ]
    }
}

/// Counts answers matching the key. A repeated `question_id` keeps its last
/// answer; ids outside `questions` are ignored.
pub fn count_correct(questions: &[BankQuestion], answers: &[AnswerSubmission]) -> usize {
    let latest: HashMap<&str, usize> = answers
        .iter()
        .map(|a| (a.question_id.as_str(), a.selected_option_index))
        .collect();
    questions
        .iter()
        .filter(|q| latest.get(q.id) == Some(&q.correct))
        .count()
}

pub fn score_percentage(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64 * 100.0
}

/// Grades one submission against `questions`. `current_level` (0–10) only
/// feeds the skill gap reported on a failing score.
pub fn grade_quiz(
    skill_name: &str,
    difficulty: Difficulty,
    questions: &[BankQuestion],
    answers: &[AnswerSubmission],
    current_level: u8,
) -> QuizResult {
    let total = questions.len();
    let correct = count_correct(questions, answers);
    let score = score_percentage(correct, total);
    let performance = Performance::from_score(score);
    let passed = score >= PASS_THRESHOLD;

    let weak_areas = to_strings(performance.weak_areas());
    let recommended_topics = if weak_areas.is_empty() {
        vec!["Review fundamentals".to_string()]
    } else {
        weak_areas.clone()
    };

    tracing::debug!(skill = skill_name, %difficulty, score, "Graded quiz");

    QuizResult {
        skill_name: skill_name.to_string(),
        difficulty_level: difficulty,
        score,
        passed,
        total_questions: total,
        correct_answers: correct,
        incorrect_answers: total - correct,
        performance_summary: performance,
        strength_areas: to_strings(performance.strength_areas()),
        weak_areas,
        recommended_topics,
        next_steps: to_strings(next_steps(score)),
        skill_gap: (!passed).then(|| skill_gap(skill_name, current_level)),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
