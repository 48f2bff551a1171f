use std::collections::BTreeMap;

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};

use crate::assessment::courses::{
    course, courses_by_difficulty, recommend_courses, Course, RecommendedCourse, BUILTIN_COURSES,
};
use crate::assessment::feedback::{assessment_feedback, AssessmentFeedback};
use crate::assessment::gaps::{
    analyze_skill_gaps, identify_skill_gaps, SkillGapAnalysis, SkillScore,
};
use crate::assessment::question_bank::{available_quizzes, question_set, Difficulty, QuizQuestion};
use crate::assessment::quiz::{grade_quiz, AnswerSubmission, QuizResult};
use crate::catalog::proficiency::MAX_SKILL_LEVEL;
use crate::errors::{AppError, AppJson, AppQuery};

// ────────────────────────────────────────────────────────────────────────────
// Request / response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AvailableQuiz {
    pub skill_name: &'static str,
    pub difficulties: Vec<Difficulty>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionQuery {
    pub skill: String,
    /// Defaults to `Beginner`.
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Serialize)]
pub struct QuizQuestionsResponse {
    pub skill_name: String,
    pub difficulty_level: Difficulty,
    pub question_count: usize,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct GradeQuizRequest {
    pub skill_name: String,
    pub difficulty_level: Difficulty,
    /// Learner's 0–10 level in the skill; feeds the reported gap.
    #[serde(default)]
    pub current_level: u8,
    pub answers: Vec<AnswerSubmission>,
}

/// Quiz history plus self-assessed 0–10 levels.
#[derive(Debug, Default, Deserialize)]
pub struct SkillProgressRequest {
    #[serde(default)]
    pub scores: Vec<SkillScore>,
    #[serde(default)]
    pub skill_levels: BTreeMap<String, u8>,
}

#[derive(Debug, Deserialize)]
pub struct CourseQuery {
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Serialize)]
pub struct CourseList {
    pub courses: Vec<&'static Course>,
    pub total_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub score: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/quiz/skills
pub async fn handle_available_quizzes() -> Json<Vec<AvailableQuiz>> {
    Json(
        available_quizzes()
            .into_iter()
            .map(|(skill_name, difficulties)| AvailableQuiz {
                skill_name,
                difficulties,
            })
            .collect(),
    )
}

/// GET /api/v1/quiz/questions
pub async fn handle_quiz_questions(
    AppQuery(query): AppQuery<QuestionQuery>,
) -> Result<Json<QuizQuestionsResponse>, AppError> {
    let difficulty = query.difficulty.unwrap_or(Difficulty::Beginner);
    let set = question_set(&query.skill, difficulty)
        .ok_or_else(|| no_questions(&query.skill, difficulty))?;
    let questions = set.public_questions();

    Ok(Json(QuizQuestionsResponse {
        skill_name: query.skill,
        difficulty_level: difficulty,
        question_count: questions.len(),
        questions,
    }))
}

/// POST /api/v1/quiz/grade
pub async fn handle_grade_quiz(
    AppJson(req): AppJson<GradeQuizRequest>,
) -> Result<Json<QuizResult>, AppError> {
    check_level(&req.skill_name, req.current_level)?;
    let set = question_set(&req.skill_name, req.difficulty_level)
        .ok_or_else(|| no_questions(&req.skill_name, req.difficulty_level))?;

    let result = grade_quiz(
        &req.skill_name,
        req.difficulty_level,
        set.questions,
        &req.answers,
        req.current_level,
    );
    tracing::info!(
        skill = %result.skill_name,
        score = result.score,
        correct = result.correct_answers,
        total = result.total_questions,
        "Quiz graded"
    );
    Ok(Json(result))
}

/// POST /api/v1/skills/gaps
pub async fn handle_skill_gaps(
    AppJson(req): AppJson<SkillProgressRequest>,
) -> Result<Json<SkillGapAnalysis>, AppError> {
    req.validate()?;
    Ok(Json(analyze_skill_gaps(&req.scores, &req.skill_levels)))
}

/// POST /api/v1/courses/recommendations
pub async fn handle_course_recommendations(
    AppJson(req): AppJson<SkillProgressRequest>,
) -> Result<Json<Vec<RecommendedCourse<'static>>>, AppError> {
    req.validate()?;
    let gaps = identify_skill_gaps(&req.scores, &req.skill_levels);
    Ok(Json(recommend_courses(BUILTIN_COURSES, &gaps, &req.skill_levels)))
}

/// GET /api/v1/courses
pub async fn handle_list_courses(AppQuery(query): AppQuery<CourseQuery>) -> Json<CourseList> {
    let courses = courses_by_difficulty(BUILTIN_COURSES, query.difficulty);
    Json(CourseList {
        total_count: courses.len(),
        courses,
    })
}

/// GET /api/v1/courses/:id
pub async fn handle_get_course(Path(id): Path<String>) -> Result<Json<&'static Course>, AppError> {
    course(BUILTIN_COURSES, &id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Course '{id}'")))
}

/// POST /api/v1/assessments/feedback
pub async fn handle_assessment_feedback(
    AppJson(req): AppJson<FeedbackRequest>,
) -> Result<Json<AssessmentFeedback>, AppError> {
    check_score("score", req.score)?;
    Ok(Json(assessment_feedback(req.score)))
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

impl SkillProgressRequest {
    fn validate(&self) -> Result<(), AppError> {
        for entry in &self.scores {
            check_score(&entry.skill_name, entry.score)?;
        }
        for (skill, level) in &self.skill_levels {
            check_level(skill, *level)?;
        }
        Ok(())
    }
}

fn check_score(label: &str, score: f64) -> Result<(), AppError> {
    if !(0.0..=100.0).contains(&score) {
        return Err(AppError::Validation(format!(
            "score for '{label}' must be between 0 and 100, got {score}"
        )));
    }
    Ok(())
}

fn check_level(skill: &str, level: u8) -> Result<(), AppError> {
    if level > MAX_SKILL_LEVEL {
        return Err(AppError::Validation(format!(
            "level for '{skill}' must be between 0 and {MAX_SKILL_LEVEL}, got {level}"
        )));
    }
    Ok(())
}

fn no_questions(skill: &str, difficulty: Difficulty) -> AppError {
    AppError::NotFound(format!("No {difficulty} questions for skill '{skill}'"))
}
