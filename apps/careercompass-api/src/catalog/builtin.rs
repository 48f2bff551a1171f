//! Built-in catalog used when no `CATALOG_PATH` is configured.

use std::collections::BTreeMap;

use crate::catalog::{CatalogSkill, Domain};

/// `(id, name, category, description, onet_code)`
type SkillRow = (&'static str, &'static str, &'static str, &'static str, &'static str);

const AGRI_TECH_SKILLS: &[SkillRow] = &[
    (
        "at_1",
        "Precision Agriculture (IoT)",
        "Technical",
        "Deployment of sensor networks for micro-climate monitoring.",
        "19-1012.00",
    ),
    (
        "at_2",
        "Autonomous Drone Piloting",
        "Operations",
        "UAV operation for crop dusting and spectral imaging.",
        "53-6051.00",
    ),
    (
        "at_3",
        "Soil Chemistry Analysis",
        "Science",
        "Nitrogen/Phosphorus optimization algorithms.",
        "19-1013.00",
    ),
    (
        "at_4",
        "Agri-Supply Chain Logistics",
        "Management",
        "Cold-chain optimization and blockchain provenance.",
        "11-3051.01",
    ),
    (
        "at_5",
        "Vertical Farming Systems",
        "Engineering",
        "Hydroponic and aeroponic system architecture.",
        "17-2199.00",
    ),
    (
        "at_6",
        "Livestock Health biometrics",
        "Data",
        "Real-time monitoring of animal welfare via wearables.",
        "29-1131.00",
    ),
];

const COMPUTER_SCIENCE_SKILLS: &[SkillRow] = &[
    (
        "cs_1",
        "AI & Machine Learning",
        "Advanced Computing",
        "Neural network architecture and LLM fine-tuning.",
        "15-1221.00",
    ),
    (
        "cs_2",
        "Cloud Architecture (AWS/GCP)",
        "Infrastructure",
        "Scalable distributed systems design.",
        "15-1299.08",
    ),
    (
        "cs_3",
        "Cybersecurity Ops",
        "Security",
        "Penetration testing and zero-trust implementation.",
        "15-1212.00",
    ),
    (
        "cs_4",
        "Full-Stack Development",
        "Engineering",
        "Modern React/Node.js application lifecycle.",
        "15-1252.00",
    ),
    (
        "cs_5",
        "DevOps & CI/CD",
        "Operations",
        "Automated deployment pipelines and containerization.",
        "15-1251.00",
    ),
    (
        "cs_6",
        "Quantum Computing Fundamentals",
        "Research",
        "Qubit logic and quantum algorithm design.",
        "19-1029.00",
    ),
];

const SMART_CITY_SKILLS: &[SkillRow] = &[
    (
        "sc_1",
        "Urban IoT Grid",
        "Technical",
        "City-wide sensor mesh for traffic and waste.",
        "17-2051.00",
    ),
    (
        "sc_2",
        "Geospatial Data (GIS)",
        "Analytics",
        "Spatial analysis for zoning and transit planning.",
        "15-1199.04",
    ),
    (
        "sc_3",
        "Renewable Microgrids",
        "Energy",
        "Solar/Wind integration into municipal power.",
        "17-2199.03",
    ),
];

const DOMAINS: &[(&str, &str, &[SkillRow])] = &[
    ("agri_tech", "Advanced Agriculture", AGRI_TECH_SKILLS),
    ("computer_science", "Computer Science", COMPUTER_SCIENCE_SKILLS),
    ("smart_city", "Smart Urban Systems", SMART_CITY_SKILLS),
];

fn skill(&(id, name, category, description, onet_code): &SkillRow) -> CatalogSkill {
    CatalogSkill {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        onet_code: Some(onet_code.to_string()),
    }
}

pub fn builtin_domains() -> Vec<Domain> {
    DOMAINS
        .iter()
        .map(|&(id, name, rows)| Domain {
            id: id.to_string(),
            name: name.to_string(),
            skills: rows.iter().map(skill).collect(),
        })
        .collect()
}

/// Default self-ratings (1–5) keyed by skill id.
pub fn builtin_ratings() -> BTreeMap<String, u8> {
    [("at_1", 4), ("at_2", 3), ("cs_1", 2), ("cs_4", 5), ("sc_2", 4)]
        .into_iter()
        .map(|(id, rating)| (id.to_string(), rating))
        .collect()
}
