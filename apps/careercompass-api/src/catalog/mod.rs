//! Skill Catalog — domains, their skills, and the user's 1–5 self-ratings.
//!
//! Loaded once at startup (built-in or from `CATALOG_PATH`) and shared
//! read-only through `AppState`.

pub mod builtin;
pub mod handlers;
pub mod proficiency;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::catalog::proficiency::{is_valid_rating, Proficiency};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSkill {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    /// O*NET-SOC occupation code, when one applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onet_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub skills: Vec<CatalogSkill>,
}

/// A catalog skill as returned by search and rating listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillHit {
    pub domain_id: String,
    pub skill: CatalogSkill,
    pub rating: Option<u8>,
    pub proficiency: Option<Proficiency>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Domain id must not be empty")]
    EmptyDomainId,

    #[error("Duplicate domain id '{0}'")]
    DuplicateDomain(String),

    #[error("Duplicate skill id '{0}'")]
    DuplicateSkill(String),

    #[error("Rating for '{0}' references an unknown skill")]
    UnknownRatedSkill(String),

    #[error("Rating {rating} for '{skill_id}' is outside 1..=5")]
    RatingOutOfRange { skill_id: String, rating: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCatalog {
    domains: Vec<Domain>,
    ratings: BTreeMap<String, u8>,
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    domains: Vec<Domain>,
    #[serde(default)]
    ratings: BTreeMap<String, u8>,
}

impl SkillCatalog {
    /// Builds and validates a catalog.
    pub fn new(domains: Vec<Domain>, ratings: BTreeMap<String, u8>) -> Result<Self, CatalogError> {
        let catalog = Self { domains, ratings };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn builtin() -> Self {
        Self {
            domains: builtin::builtin_domains(),
            ratings: builtin::builtin_ratings(),
        }
    }

    /// Reads a `{"domains": [...], "ratings": {...}}` JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let file: CatalogFile = serde_json::from_str(&raw)
            .with_context(|| format!("Catalog file {} is not valid JSON", path.display()))?;
        let catalog = Self::new(file.domains, file.ratings)
            .with_context(|| format!("Catalog file {} failed validation", path.display()))?;

        info!(
            "Loaded skill catalog from {} ({} domains, {} ratings)",
            path.display(),
            catalog.domains.len(),
            catalog.ratings.len()
        );
        Ok(catalog)
    }

    /// Loads from `path` when given, otherwise falls back to the built-in catalog.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_json_file(p),
            None => {
                info!("Using built-in skill catalog");
                Ok(Self::builtin())
            }
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut domain_ids = HashSet::new();
        let mut skill_ids = HashSet::new();

        for domain in &self.domains {
            if domain.id.trim().is_empty() {
                return Err(CatalogError::EmptyDomainId);
            }
            if !domain_ids.insert(domain.id.as_str()) {
                return Err(CatalogError::DuplicateDomain(domain.id.clone()));
            }
            for skill in &domain.skills {
                if !skill_ids.insert(skill.id.as_str()) {
                    return Err(CatalogError::DuplicateSkill(skill.id.clone()));
                }
            }
        }

        for (skill_id, &rating) in &self.ratings {
            if !skill_ids.contains(skill_id.as_str()) {
                return Err(CatalogError::UnknownRatedSkill(skill_id.clone()));
            }
            if !is_valid_rating(rating) {
                return Err(CatalogError::RatingOutOfRange {
                    skill_id: skill_id.clone(),
                    rating,
                });
            }
        }

        Ok(())
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn domain(&self, id: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.id == id)
    }

    pub fn skill(&self, id: &str) -> Option<(&Domain, &CatalogSkill)> {
        self.domains
            .iter()
            .find_map(|d| d.skills.iter().find(|s| s.id == id).map(|s| (d, s)))
    }

    /// Looks up a single skill with its rating attached.
    pub fn skill_hit(&self, id: &str) -> Option<SkillHit> {
        self.skill(id).map(|(domain, skill)| self.hit(domain, skill))
    }

    pub fn rating(&self, skill_id: &str) -> Option<u8> {
        self.ratings.get(skill_id).copied()
    }

    /// Case-insensitive search over skill name and description.
    ///
    /// An empty or absent query matches everything; `category` is an exact,
    /// case-insensitive filter. Results keep catalog order.
    pub fn search(&self, query: Option<&str>, category: Option<&str>) -> Vec<SkillHit> {
        let query = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();
        let category = category.map(|c| c.trim().to_lowercase());

        self.iter_skills()
            .filter(|(_, skill)| {
                query.is_empty()
                    || skill.name.to_lowercase().contains(&query)
                    || skill.description.to_lowercase().contains(&query)
            })
            .filter(|(_, skill)| match &category {
                Some(c) => skill.category.to_lowercase() == *c,
                None => true,
            })
            .map(|(domain, skill)| self.hit(domain, skill))
            .collect()
    }

    /// Every rated skill, in catalog order.
    pub fn rated_skills(&self) -> Vec<SkillHit> {
        self.iter_skills()
            .filter(|(_, skill)| self.ratings.contains_key(&skill.id))
            .map(|(domain, skill)| self.hit(domain, skill))
            .collect()
    }

    fn iter_skills(&self) -> impl Iterator<Item = (&Domain, &CatalogSkill)> {
        self.domains
            .iter()
            .flat_map(|d| d.skills.iter().map(move |s| (d, s)))
    }

    fn hit(&self, domain: &Domain, skill: &CatalogSkill) -> SkillHit {
        let rating = self.rating(&skill.id);
        SkillHit {
            domain_id: domain.id.clone(),
            skill: skill.clone(),
            rating,
            proficiency: rating.map(Proficiency::from_rating),
        }
    }
}
