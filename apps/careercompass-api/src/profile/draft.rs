//! Editable profile draft backing the profile screen.

use crate::models::profile::UserProfile;
use crate::profile::suggestions::suggested_skills;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    profile: UserProfile,
}

impl ProfileDraft {
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }

    pub fn into_profile(self) -> UserProfile {
        self.profile
    }

    /// Suggestions for the current title, minus skills already listed.
    pub fn suggestions(&self) -> Vec<String> {
        let title = self.profile.title.as_deref().unwrap_or_default();
        suggested_skills(title)
            .iter()
            .filter(|s| !self.profile.skills.iter().any(|have| have == *s))
            .map(|s| s.to_string())
            .collect()
    }

    /// Appends a trimmed skill. Returns false for blanks and exact duplicates.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.profile.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.profile.skills.push(skill.to_string());
        true
    }

    /// Removes every exact match. Returns whether anything was removed.
    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.profile.skills.len();
        self.profile.skills.retain(|s| s != skill);
        self.profile.skills.len() != before
    }
}
