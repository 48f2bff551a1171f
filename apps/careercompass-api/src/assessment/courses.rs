//! Course table and gap-driven course recommendations.
//!
//! Recommendations are built in three passes, then sorted by relevance
//! (stable, highest first), de-duplicated by course id, and capped:
//!
//! 1. every course covering a gap skill:
//!    `match/len * 40 + (100 - gap*5)/100 * 40 + rating/5 * 20`, max 100
//! 2. up to two new courses per developing skill (self-rated below 3, not a
//!    gap): `1/len * 50 + rating/5 * 50`, max 90
//! 3. with no gaps at all, one new Intermediate/Advanced course per skill
//!    rated 5 or more: `level/10 * 70 + rating/5 * 30`, max 85

use std::collections::BTreeMap;

use serde::Serialize;

use crate::assessment::gaps::SkillGap;
use crate::assessment::question_bank::Difficulty;
use crate::catalog::proficiency::MAX_SKILL_LEVEL;

const MAX_RECOMMENDATIONS: usize = 20;
const MAX_COURSE_RATING: f64 = 5.0;

const GAP_RELEVANCE_CAP: f64 = 100.0;
const DEVELOPING_RELEVANCE_CAP: f64 = 90.0;
const ADVANCE_RELEVANCE_CAP: f64 = 85.0;

/// Self-rated levels below this count as a skill still being developed.
const DEVELOPING_BELOW: u8 = 3;
/// Developing skills considered for the second pass.
const DEVELOPING_SKILL_LIMIT: usize = 5;
const COURSES_PER_DEVELOPING_SKILL: usize = 2;
/// Self-rated levels at or above this are worth advancing.
const ADVANCE_FROM: u8 = 5;

#[derive(Debug, Serialize)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub provider: &'static str,
    pub url: &'static str,
    pub difficulty_level: Difficulty,
    pub duration_hours: u32,
    pub skills_covered: &'static [&'static str],
    /// 0–5.
    pub rating: f64,
}

impl Course {
    fn covers(&self, skill: &str) -> bool {
        self.skills_covered.iter().any(|s| *s == skill)
    }

    fn skill_count(&self) -> f64 {
        self.skills_covered.len().max(1) as f64
    }

    fn rating_share(&self) -> f64 {
        self.rating / MAX_COURSE_RATING
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendedCourse<'a> {
    pub course: &'a Course,
    /// 0–100.
    pub relevance_score: f64,
    pub match_reason: String,
}

pub fn course<'a>(courses: &'a [Course], id: &str) -> Option<&'a Course> {
    courses.iter().find(|c| c.id == id)
}

pub fn courses_by_difficulty(
    courses: &[Course],
    difficulty: Option<Difficulty>,
) -> Vec<&Course> {
    courses
        .iter()
        .filter(|c| difficulty.map_or(true, |d| c.difficulty_level == d))
        .collect()
}

pub fn gap_relevance(course: &Course, gap: &SkillGap) -> f64 {
    let matching = course
        .skills_covered
        .iter()
        .filter(|s| **s == gap.skill_name)
        .count() as f64;
    let gap_priority = 100.0 - f64::from(gap.gap_level) * 5.0;
    let relevance = matching / course.skill_count() * 40.0
        + gap_priority / 100.0 * 40.0
        + course.rating_share() * 20.0;
    relevance.min(GAP_RELEVANCE_CAP)
}

pub fn developing_relevance(course: &Course) -> f64 {
    let relevance = 1.0 / course.skill_count() * 50.0 + course.rating_share() * 50.0;
    relevance.min(DEVELOPING_RELEVANCE_CAP)
}

pub fn advance_relevance(course: &Course, level: u8) -> f64 {
    let relevance = f64::from(level) / f64::from(MAX_SKILL_LEVEL) * 70.0
        + course.rating_share() * 30.0;
    relevance.min(ADVANCE_RELEVANCE_CAP)
}

pub fn recommend_courses<'a>(
    courses: &'a [Course],
    gaps: &[SkillGap],
    skill_levels: &BTreeMap<String, u8>,
) -> Vec<RecommendedCourse<'a>> {
    let mut recs: Vec<RecommendedCourse<'a>> = Vec::new();

    for gap in gaps {
        for course in courses.iter().filter(|c| c.covers(&gap.skill_name)) {
            recs.push(RecommendedCourse {
                course,
                relevance_score: gap_relevance(course, gap),
                match_reason: format!(
                    "Recommended to address gap in {} (Current: {}/10, Required: {}/10)",
                    gap.skill_name, gap.current_level, gap.required_level
                ),
            });
        }
    }

    let developing = skill_levels
        .iter()
        .filter(|(skill, level)| {
            **level < DEVELOPING_BELOW && !gaps.iter().any(|g| &g.skill_name == *skill)
        })
        .take(DEVELOPING_SKILL_LIMIT);
    for (skill, _) in developing {
        let picks: Vec<&'a Course> = unrecommended(courses, &recs, |c| c.covers(skill))
            .take(COURSES_PER_DEVELOPING_SKILL)
            .collect();
        for course in picks {
            recs.push(RecommendedCourse {
                course,
                relevance_score: developing_relevance(course),
                match_reason: format!("Learn {skill} - a skill you're developing"),
            });
        }
    }

    if gaps.is_empty() {
        for (skill, &level) in skill_levels.iter().filter(|(_, l)| **l >= ADVANCE_FROM) {
            let pick = unrecommended(courses, &recs, |c| {
                c.covers(skill) && c.difficulty_level != Difficulty::Beginner
            })
            .next();
            if let Some(course) = pick {
                recs.push(RecommendedCourse {
                    course,
                    relevance_score: advance_relevance(course, level),
                    match_reason: format!("Advance your {skill} skills to expert level"),
                });
            }
        }
    }

    recs.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    let mut seen: Vec<&str> = Vec::new();
    recs.retain(|rec| {
        if seen.contains(&rec.course.id) {
            return false;
        }
        seen.push(rec.course.id);
        true
    });
    recs.truncate(MAX_RECOMMENDATIONS);

    tracing::debug!(
        recommendations = recs.len(),
        gaps = gaps.len(),
        "Generated course recommendations"
    );
    recs
}

fn unrecommended<'a, 'r>(
    courses: &'a [Course],
    recs: &'r [RecommendedCourse<'a>],
    wanted: impl Fn(&Course) -> bool + 'r,
) -> impl Iterator<Item = &'a Course> + 'r
where
    'a: 'r,
{
    courses
        .iter()
        .filter(move |c| wanted(c) && !recs.iter().any(|r| r.course.id == c.id))
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in courses
// ────────────────────────────────────────────────────────────────────────────

pub static BUILTIN_COURSES: &[Course] = &[
    Course {
        id: "crs_python_foundations",
        title: "Python Foundations",
        description: "Syntax, data types, and control flow for new programmers.",
        provider: "Internal",
        url: "/learn/python-foundations",
        difficulty_level: Difficulty::Beginner,
        duration_hours: 12,
        skills_covered: &["Python"],
        rating: 4.6,
    },
    Course {
        id: "crs_python_data",
        title: "Python for Data Analysis",
        description: "Pandas and NumPy workflows for cleaning and exploring data.",
        provider: "Coursera",
        url: "/learn/python-for-data-analysis",
        difficulty_level: Difficulty::Intermediate,
        duration_hours: 20,
        skills_covered: &["Python", "Data Science"],
        rating: 4.5,
    },
    Course {
        id: "crs_python_internals",
        title: "Advanced Python Internals",
        description: "Metaclasses, the GIL, and memory management in CPython.",
        provider: "Internal",
        url: "/learn/advanced-python-internals",
        difficulty_level: Difficulty::Advanced,
        duration_hours: 16,
        skills_covered: &["Python"],
        rating: 4.7,
    },
    Course {
        id: "crs_data_science_bootcamp",
        title: "Data Science Bootcamp",
        description: "Statistics, visualisation, and model evaluation end to end.",
        provider: "Coursera",
        url: "/learn/data-science-bootcamp",
        difficulty_level: Difficulty::Beginner,
        duration_hours: 40,
        skills_covered: &["Data Science", "Python"],
        rating: 4.5,
    },
    Course {
        id: "crs_js_essentials",
        title: "JavaScript Essentials",
        description: "The DOM, variables, and events in the browser.",
        provider: "Udemy",
        url: "/learn/javascript-essentials",
        difficulty_level: Difficulty::Beginner,
        duration_hours: 10,
        skills_covered: &["JavaScript", "Web Development"],
        rating: 4.4,
    },
    Course {
        id: "crs_modern_web",
        title: "Modern Web Development",
        description: "Component-driven front ends with React and async JavaScript.",
        provider: "Udemy",
        url: "/learn/modern-web-development",
        difficulty_level: Difficulty::Intermediate,
        duration_hours: 30,
        skills_covered: &["Web Development", "JavaScript", "React"],
        rating: 4.3,
    },
    Course {
        id: "crs_ml_fundamentals",
        title: "Machine Learning Fundamentals",
        description: "Supervised learning, features, and model evaluation.",
        provider: "Coursera",
        url: "/learn/machine-learning-fundamentals",
        difficulty_level: Difficulty::Beginner,
        duration_hours: 25,
        skills_covered: &["Machine Learning", "Python"],
        rating: 4.8,
    },
    Course {
        id: "crs_plant_vision",
        title: "Computer Vision for Plant Disease",
        description: "Image classification pipelines for crop health monitoring.",
        provider: "Internal",
        url: "/learn/computer-vision-for-plant-disease",
        difficulty_level: Difficulty::Intermediate,
        duration_hours: 18,
        skills_covered: &["Deep Learning", "Machine Learning"],
        rating: 4.5,
    },
    Course {
        id: "crs_llm_ops",
        title: "Large Language Model Ops",
        description: "Serving, evaluating, and monitoring LLMs in production.",
        provider: "Internal",
        url: "/learn/large-language-model-ops",
        difficulty_level: Difficulty::Advanced,
        duration_hours: 14,
        skills_covered: &["Machine Learning"],
        rating: 4.6,
    },
    Course {
        id: "crs_rust_embedded",
        title: "Rust for Embedded Systems 101",
        description: "Ownership, no_std, and peripheral access on microcontrollers.",
        provider: "Internal",
        url: "/learn/rust-for-embedded-systems",
        difficulty_level: Difficulty::Beginner,
        duration_hours: 20,
        skills_covered: &["Rust"],
        rating: 4.7,
    },
    Course {
        id: "crs_bio_hpc",
        title: "High Performance Computing for Bio",
        description: "Scheduling genomic workloads on clusters and GPUs.",
        provider: "Internal",
        url: "/learn/hpc-for-bio",
        difficulty_level: Difficulty::Intermediate,
        duration_hours: 22,
        skills_covered: &["HPC Clusters", "CUDA"],
        rating: 4.2,
    },
    Course {
        id: "crs_cdisc",
        title: "Clinical Data Standards (CDISC)",
        description: "SDTM and ADaM datasets for clinical trial submissions.",
        provider: "Internal",
        url: "/learn/clinical-data-standards",
        difficulty_level: Difficulty::Beginner,
        duration_hours: 8,
        skills_covered: &["Clinical Trials Mgmt"],
        rating: 4.3,
    },
    Course {
        id: "crs_urban_policy",
        title: "Urban Policy & Data Governance",
        description: "Privacy, procurement, and open data rules for city platforms.",
        provider: "Internal",
        url: "/learn/urban-policy-and-data-governance",
        difficulty_level: Difficulty::Intermediate,
        duration_hours: 12,
        skills_covered: &["Policy Frameworks"],
        rating: 4.1,
    },
    Course {
        id: "crs_traffic_sim",
        title: "Micro-simulation of Traffic Networks",
        description: "Agent-based traffic models and flow calibration.",
        provider: "Internal",
        url: "/learn/traffic-micro-simulation",
        difficulty_level: Difficulty::Advanced,
        duration_hours: 24,
        skills_covered: &["Traffic Flow Theory"],
        rating: 4.0,
    },
    Course {
        id: "crs_robotics_control",
        title: "Advanced Robotics Control",
        description: "Path planning and feedback control for autonomous machinery.",
        provider: "Internal",
        url: "/learn/advanced-robotics-control",
        difficulty_level: Difficulty::Advanced,
        duration_hours: 28,
        skills_covered: &["Robotics"],
        rating: 4.4,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::gaps::skill_gap;

    fn levels(pairs: &[(&str, u8)]) -> BTreeMap<String, u8> {
        pairs.iter().map(|(s, l)| (s.to_string(), *l)).collect()
    }

    fn ids<'a>(recs: &[RecommendedCourse<'a>]) -> Vec<&'a str> {
        recs.iter().map(|r| r.course.id).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_gap_courses_rank_by_weighted_relevance() {
        let gaps = [skill_gap("Python", 0)];
        let recs = recommend_courses(BUILTIN_COURSES, &gaps, &BTreeMap::new());

        assert_eq!(
            ids(&recs),
            [
                "crs_python_internals",
                "crs_python_foundations",
                "crs_ml_fundamentals",
                "crs_python_data",
                "crs_data_science_bootcamp",
            ]
        );
        // 1/1 * 40 + 75/100 * 40 + 4.7/5 * 20
        assert!(approx(recs[0].relevance_score, 88.8));
        // 1/2 * 40 + 75/100 * 40 + 4.5/5 * 20
        assert!(approx(recs[3].relevance_score, 68.0));
        assert_eq!(
            recs[0].match_reason,
            "Recommended to address gap in Python (Current: 0/10, Required: 5/10)"
        );
    }

    #[test]
    fn test_duplicate_courses_keep_best_score() {
        let gaps = [skill_gap("Python", 0), skill_gap("Data Science", 4)];
        let recs = recommend_courses(BUILTIN_COURSES, &gaps, &BTreeMap::new());

        assert_eq!(recs.len(), 5);
        let data = recs.iter().find(|r| r.course.id == "crs_python_data").unwrap();
        assert!(approx(data.relevance_score, 74.0));
        assert!(data.match_reason.contains("gap in Data Science"));
    }

    #[test]
    fn test_developing_and_advancing_without_gaps() {
        let recs = recommend_courses(
            BUILTIN_COURSES,
            &[],
            &levels(&[("Rust", 1), ("Robotics", 2), ("Python", 6)]),
        );

        assert_eq!(
            ids(&recs),
            ["crs_robotics_control", "crs_rust_embedded", "crs_python_data"]
        );
        assert!(approx(recs[0].relevance_score, 90.0));
        assert_eq!(recs[0].match_reason, "Learn Robotics - a skill you're developing");
        // 6/10 * 70 + 4.5/5 * 30
        assert!(approx(recs[2].relevance_score, 69.0));
        assert_eq!(recs[2].match_reason, "Advance your Python skills to expert level");
    }

    #[test]
    fn test_gaps_suppress_other_passes() {
        let gaps = [skill_gap("Robotics", 1)];
        let recs = recommend_courses(
            BUILTIN_COURSES,
            &gaps,
            &levels(&[("Robotics", 1), ("Rust", 0), ("Python", 9)]),
        );

        // Rust is still developing; Python is not advanced while gaps exist.
        assert_eq!(ids(&recs), ["crs_rust_embedded", "crs_robotics_control"]);
        assert!(recs[1].match_reason.starts_with("Recommended to address gap in Robotics"));
    }

    #[test]
    fn test_relevance_caps() {
        let perfect = Course {
            id: "x",
            title: "X",
            description: "",
            provider: "Internal",
            url: "/x",
            difficulty_level: Difficulty::Advanced,
            duration_hours: 1,
            skills_covered: &["X"],
            rating: 5.0,
        };
        assert!(approx(gap_relevance(&perfect, &skill_gap("X", 10)), 100.0));
        assert!(approx(developing_relevance(&perfect), 90.0));
        assert!(approx(advance_relevance(&perfect, 10), 85.0));
    }

    #[test]
    fn test_no_inputs_no_recommendations() {
        assert!(recommend_courses(BUILTIN_COURSES, &[], &BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_course_listing() {
        assert_eq!(courses_by_difficulty(BUILTIN_COURSES, None).len(), BUILTIN_COURSES.len());
        let advanced = courses_by_difficulty(BUILTIN_COURSES, Some(Difficulty::Advanced));
        assert_eq!(advanced.len(), 4);
        assert!(course(BUILTIN_COURSES, "crs_cdisc").is_some());
        assert!(course(BUILTIN_COURSES, "crs_unknown").is_none());
    }

    #[test]
    fn test_course_ids_are_unique() {
        for (i, c) in BUILTIN_COURSES.iter().enumerate() {
            assert!(
                BUILTIN_COURSES[i + 1..].iter().all(|other| other.id != c.id),
                "duplicate course id {}",
                c.id
            );
            assert!((0.0..=MAX_COURSE_RATING).contains(&c.rating));
        }
    }
}
