//! Proficiency labels for 0–100 skill levels, 1–5 self-ratings, and the
//! coarser 0–10 levels used by quiz skill gaps.
//!
//! The 0–100 scale has five bands (the skill screen labels). The 0–10 scale
//! only ever yields the lower three plus `Advanced`, matching how gap reports
//! label a learner's current level.

use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Level points per rating step; a rating of 5 is level 100.
const LEVEL_PER_RATING: u32 = 20;

/// Top of the 0–10 skill-level scale used by quizzes and course matching.
pub const MAX_SKILL_LEVEL: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Proficient,
    Advanced,
    Expert,
}

impl Proficiency {
    /// Maps a 0–100 level to its label. Values above 100 are Expert.
    pub fn from_level(level: u32) -> Self {
        match level {
            0..=49 => Proficiency::Beginner,
            50..=64 => Proficiency::Intermediate,
            65..=79 => Proficiency::Proficient,
            80..=89 => Proficiency::Advanced,
            _ => Proficiency::Expert,
        }
    }

    pub fn from_rating(rating: u8) -> Self {
        Self::from_level(rating_to_level(rating))
    }

    /// Three-band label for a 0–10 skill level: up to 3 is Beginner, up to 6
    /// Intermediate, anything higher Advanced.
    pub fn from_skill_level(level: u8) -> Self {
        match level {
            0..=3 => Proficiency::Beginner,
            4..=6 => Proficiency::Intermediate,
            _ => Proficiency::Advanced,
        }
    }
}

pub fn rating_to_level(rating: u8) -> u32 {
    u32::from(rating.min(MAX_RATING)) * LEVEL_PER_RATING
}

pub fn is_valid_rating(rating: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(Proficiency::from_level(40), Proficiency::Beginner);
        assert_eq!(Proficiency::from_level(60), Proficiency::Intermediate);
        assert_eq!(Proficiency::from_level(70), Proficiency::Proficient);
        assert_eq!(Proficiency::from_level(75), Proficiency::Proficient);
        assert_eq!(Proficiency::from_level(85), Proficiency::Advanced);
        assert_eq!(Proficiency::from_level(88), Proficiency::Advanced);
        assert_eq!(Proficiency::from_level(92), Proficiency::Expert);
    }

    #[test]
    fn test_ratings_map_to_levels() {
        assert_eq!(rating_to_level(1), 20);
        assert_eq!(rating_to_level(5), 100);
        assert_eq!(Proficiency::from_rating(2), Proficiency::Beginner);
        assert_eq!(Proficiency::from_rating(3), Proficiency::Intermediate);
        assert_eq!(Proficiency::from_rating(4), Proficiency::Advanced);
        assert_eq!(Proficiency::from_rating(5), Proficiency::Expert);
    }

    #[test]
    fn test_skill_level_bands() {
        assert_eq!(Proficiency::from_skill_level(0), Proficiency::Beginner);
        assert_eq!(Proficiency::from_skill_level(3), Proficiency::Beginner);
        assert_eq!(Proficiency::from_skill_level(4), Proficiency::Intermediate);
        assert_eq!(Proficiency::from_skill_level(6), Proficiency::Intermediate);
        assert_eq!(Proficiency::from_skill_level(7), Proficiency::Advanced);
        assert_eq!(Proficiency::from_skill_level(MAX_SKILL_LEVEL), Proficiency::Advanced);
    }

    #[test]
    fn test_rating_bounds() {
        assert!(!is_valid_rating(0));
        assert!(is_valid_rating(1));
        assert!(is_valid_rating(5));
        assert!(!is_valid_rating(6));
    }
}
