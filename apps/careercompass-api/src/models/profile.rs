#![allow(dead_code)]

use serde::{Deserialize, Deserializer, Serialize};

/// A user's self-described profile, as posted by the dashboard client.
///
/// `title` and `skills` are optional on the wire; absent or `null` values
/// behave as an empty string and an empty list everywhere downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Lower-cased title, or an empty string when none was given.
    pub fn normalized_title(&self) -> String {
        self.title.as_deref().unwrap_or_default().to_lowercase()
    }

    /// Lower-cased skills in caller order.
    pub fn normalized_skills(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.to_lowercase()).collect()
    }
}
