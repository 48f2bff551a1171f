//! Skill assessment — quiz grading, skill-gap detection, course
//! recommendations, and assessment feedback.
//!
//! Everything here is a pure function over the built-in question bank and
//! course table; callers pass scores and self-assessed levels in.

pub mod courses;
pub mod feedback;
pub mod gaps;
pub mod handlers;
pub mod question_bank;
pub mod quiz;

/// Scores at or above this percentage pass a quiz or assessment.
pub const PASS_THRESHOLD: f64 = 70.0;
