//! Hand-authored dashboard content, one table per archetype.
//!
//! `Data` and `Generalist` share `DEFAULT_CONTENT`.

use serde::{Deserialize, Serialize};

use crate::intelligence::archetype::Archetype;

/// Upper bound of every competence score.
pub const SCALE_MAX: u32 = 150;

/// Seed row for the competence matrix before any boost is applied.
#[derive(Debug, Clone, Copy)]
pub struct MatrixSeed {
    pub subject: &'static str,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Med,
    Low,
}

#[derive(Debug, Clone, Copy)]
pub struct DirectiveSeed {
    pub id: u32,
    pub description: &'static str,
    pub estimated_duration: &'static str,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy)]
pub struct CareerPathSeed {
    pub role: &'static str,
    pub match_percent: u32,
    pub missing_skills: &'static [&'static str],
    pub recommended_course: &'static str,
    pub suggested_project: &'static str,
    pub project_ready: bool,
}

/// Everything the dashboard shows for one archetype.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeContent {
    pub specific_matrix: [MatrixSeed; 3],
    pub directives: [DirectiveSeed; 2],
    /// Text following `Operative {name}, ` in the insight line.
    pub insight_body: &'static str,
    pub career_paths: [CareerPathSeed; 2],
}

/// Appended after the archetype-specific entries for every archetype.
pub const BASELINE_MATRIX: [MatrixSeed; 3] = [
    MatrixSeed {
        subject: "System Architecture",
        score: 80,
    },
    MatrixSeed {
        subject: "Data Ethics",
        score: 90,
    },
    MatrixSeed {
        subject: "Project Mgmt",
        score: 70,
    },
];

/// Third directive, identical for every archetype.
pub const COMMON_DIRECTIVE: DirectiveSeed = DirectiveSeed {
    id: 3,
    description: "Update Skill Profile with new Cert",
    estimated_duration: "5m",
    priority: Priority::Low,
};

pub static BIO_CONTENT: ArchetypeContent = ArchetypeContent {
    specific_matrix: [
        MatrixSeed {
            subject: "Bio-Informatics",
            score: 130,
        },
        MatrixSeed {
            subject: "Genomics",
            score: 110,
        },
        MatrixSeed {
            subject: "Python",
            score: 95,
        },
    ],
    directives: [
        DirectiveSeed {
            id: 1,
            description: "Analyze CRISPR Sequence Data Batch #404",
            estimated_duration: "45m",
            priority: Priority::High,
        },
        DirectiveSeed {
            id: 2,
            description: "Review protein folding simulation results",
            estimated_duration: "25m",
            priority: Priority::Med,
        },
    ],
    insight_body: "your genomic sequencing efficiency is in the top 5 percentile. \
         Recommendation: Focus on 'Viral Vector Analysis' to unlock the Lead \
         Researcher role.",
    career_paths: [
        CareerPathSeed {
            role: "Lead Bio-Data Architect",
            match_percent: 88,
            missing_skills: &["Clinical Trials Mgmt"],
            recommended_course: "Clinical Data Standards (CDISC)",
            suggested_project: "Automated Drug Discovery Pipeline",
            project_ready: true,
        },
        CareerPathSeed {
            role: "Genomic Systems Engineer",
            match_percent: 65,
            missing_skills: &["HPC Clusters", "CUDA"],
            recommended_course: "High Performance Computing for Bio",
            suggested_project: "Parallel DNA Sequencing Engine",
            project_ready: false,
        },
    ],
};

pub static AGRI_CONTENT: ArchetypeContent = ArchetypeContent {
    specific_matrix: [
        MatrixSeed {
            subject: "Crop Systems",
            score: 125,
        },
        MatrixSeed {
            subject: "IoT Protocols",
            score: 100,
        },
        MatrixSeed {
            subject: "Sustainability",
            score: 115,
        },
    ],
    directives: [
        DirectiveSeed {
            id: 1,
            description: "Calibrate Soil Moisture Sensors (Zone 4)",
            estimated_duration: "30m",
            priority: Priority::High,
        },
        DirectiveSeed {
            id: 2,
            description: "Review drone telemetry logs",
            estimated_duration: "15m",
            priority: Priority::Med,
        },
    ],
    insight_body: "crop yield predictions are 12% more accurate this week. Recommendation: \
         Integrate 'Satellite Imagery Analysis' to further refine precision \
         farming models.",
    career_paths: [
        CareerPathSeed {
            role: "Autonomous Farm Systems Lead",
            match_percent: 92,
            missing_skills: &[],
            recommended_course: "Advanced Robotics Control",
            suggested_project: "Drone Swarm Pesticide Deployment",
            project_ready: true,
        },
        CareerPathSeed {
            role: "Agricultural Data Scientist",
            match_percent: 74,
            missing_skills: &["Deep Learning"],
            recommended_course: "Computer Vision for Plant Disease",
            suggested_project: "Leaf Pathology Classifier",
            project_ready: false,
        },
    ],
};

pub static URBAN_CONTENT: ArchetypeContent = ArchetypeContent {
    specific_matrix: [
        MatrixSeed {
            subject: "Urban GIS",
            score: 140,
        },
        MatrixSeed {
            subject: "Spatial Analysis",
            score: 105,
        },
        MatrixSeed {
            subject: "Civil Eng",
            score: 90,
        },
    ],
    directives: [
        DirectiveSeed {
            id: 1,
            description: "Optimize Traffic Flow Algorithm (Sector 7)",
            estimated_duration: "1h",
            priority: Priority::High,
        },
        DirectiveSeed {
            id: 2,
            description: "Update GIS heatmap layers",
            estimated_duration: "20m",
            priority: Priority::Med,
        },
    ],
    insight_body: "traffic congestion models are converging. Recommendation: Deepen \
         knowledge in 'Smart Grid Energy Distribution' to become a holistic Smart \
         City Architect.",
    career_paths: [
        CareerPathSeed {
            role: "Smart City Chief Architect",
            match_percent: 85,
            missing_skills: &["Policy Frameworks"],
            recommended_course: "Urban Policy & Data Governance",
            suggested_project: "City-Wide IoT Grid Simulation",
            project_ready: true,
        },
        CareerPathSeed {
            role: "Transportation Systems Engineer",
            match_percent: 70,
            missing_skills: &["Traffic Flow Theory"],
            recommended_course: "Micro-simulation of Traffic Networks",
            suggested_project: "Adaptive Traffic Light Controller",
            project_ready: false,
        },
    ],
};

pub static DEFAULT_CONTENT: ArchetypeContent = ArchetypeContent {
    specific_matrix: [
        MatrixSeed {
            subject: "Full Stack",
            score: 110,
        },
        MatrixSeed {
            subject: "Cloud Infra",
            score: 100,
        },
        MatrixSeed {
            subject: "AI/ML",
            score: 120,
        },
    ],
    directives: [
        DirectiveSeed {
            id: 1,
            description: "Refactor Authentication Microservice",
            estimated_duration: "45m",
            priority: Priority::High,
        },
        DirectiveSeed {
            id: 2,
            description: "Review Pull Request #42 in CommuteOS",
            estimated_duration: "15m",
            priority: Priority::Med,
        },
    ],
    insight_body: "your code velocity is stable. Recommendation: Explore 'Rust Systems \
         Programming' to optimize low-level performance and unlock high-frequency \
         trading projects.",
    career_paths: [
        CareerPathSeed {
            role: "Principal Systems Architect",
            match_percent: 78,
            missing_skills: &["Rust", "Distributed Systems"],
            recommended_course: "Rust for Embedded Systems 101",
            suggested_project: "Distributed Ledger for Supply Chain",
            project_ready: false,
        },
        CareerPathSeed {
            role: "AI Solutions Lead",
            match_percent: 92,
            missing_skills: &[],
            recommended_course: "Large Language Model Ops",
            suggested_project: "Neural Search Engine",
            project_ready: true,
        },
    ],
};

/// Looks up the content table for an archetype.
pub fn content_for(archetype: Archetype) -> &'static ArchetypeContent {
    match archetype {
        Archetype::Bio => &BIO_CONTENT,
        Archetype::Agri => &AGRI_CONTENT,
        Archetype::Urban => &URBAN_CONTENT,
        Archetype::Data | Archetype::Generalist => &DEFAULT_CONTENT,
    }
}
