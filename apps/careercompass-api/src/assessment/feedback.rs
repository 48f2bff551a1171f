//! Pass/fail gap analysis for a scored domain assessment.

use serde::Serialize;

use crate::assessment::PASS_THRESHOLD;

const PASSED_ANALYSIS: &str =
    "Excellent command of core concepts. You are ready for advanced modules.";
const PASSED_ACTIONS: &[&str] = &["Advanced Certification", "Project: Build a real-world app"];

const FAILED_ANALYSIS: &str =
    "Found gaps in foundational knowledge, specifically in interoperability standards.";
const FAILED_ACTIONS: &[&str] = &[
    "Review Module 1: Introduction to FHIR",
    "Watch: 'Data Privacy in Healthcare' (15m)",
    "Practice: Mock dataset exercises",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentFeedback {
    pub score: f64,
    pub passed: bool,
    pub gap_analysis: String,
    pub recommended_actions: Vec<String>,
}

pub fn assessment_feedback(score: f64) -> AssessmentFeedback {
    let passed = score >= PASS_THRESHOLD;
    let (analysis, actions) = if passed {
        (PASSED_ANALYSIS, PASSED_ACTIONS)
    } else {
        (FAILED_ANALYSIS, FAILED_ACTIONS)
    };

    AssessmentFeedback {
        score,
        passed,
        gap_analysis: analysis.to_string(),
        recommended_actions: actions.iter().map(|a| a.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_mark_is_inclusive() {
        let feedback = assessment_feedback(70.0);
        assert!(feedback.passed);
        assert_eq!(feedback.recommended_actions.len(), 2);
        assert!(feedback.gap_analysis.starts_with("Excellent command"));
    }

    #[test]
    fn test_failing_score_lists_remedial_actions() {
        let feedback = assessment_feedback(69.5);
        assert!(!feedback.passed);
        assert_eq!(
            feedback.recommended_actions[0],
            "Review Module 1: Introduction to FHIR"
        );
        assert_eq!(feedback.recommended_actions.len(), 3);
    }
}
