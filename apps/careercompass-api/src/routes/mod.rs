pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::catalog::handlers as catalog;
use crate::intelligence::handlers as intelligence;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Dashboard intelligence
        .route("/api/v1/dashboard", post(intelligence::handle_dashboard))
        .route(
            "/api/v1/dashboard/archetype",
            post(intelligence::handle_archetype),
        )
        // Skill catalog
        .route(
            "/api/v1/catalog/domains",
            get(catalog::handle_list_domains),
        )
        .route(
            "/api/v1/catalog/domains/:id",
            get(catalog::handle_get_domain),
        )
        .route("/api/v1/catalog/skills", get(catalog::handle_search_skills))
        .route("/api/v1/catalog/skills/:id", get(catalog::handle_get_skill))
        .route("/api/v1/catalog/ratings", get(catalog::handle_rated_skills))
        // Profile editing
        .route(
            "/api/v1/profile/suggestions",
            post(profile::handle_suggestions),
        )
        .route("/api/v1/profile/skills", post(profile::handle_edit_skills))
        // Skill assessment
        .route(
            "/api/v1/quiz/skills",
            get(assessment::handle_available_quizzes),
        )
        .route(
            "/api/v1/quiz/questions",
            get(assessment::handle_quiz_questions),
        )
        .route("/api/v1/quiz/grade", post(assessment::handle_grade_quiz))
        .route("/api/v1/skills/gaps", post(assessment::handle_skill_gaps))
        .route("/api/v1/courses", get(assessment::handle_list_courses))
        .route(
            "/api/v1/courses/recommendations",
            post(assessment::handle_course_recommendations),
        )
        .route("/api/v1/courses/:id", get(assessment::handle_get_course))
        .route(
            "/api/v1/assessments/feedback",
            post(assessment::handle_assessment_feedback),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::SkillCatalog;

    fn app() -> Router {
        build_router(AppState {
            catalog: Arc::new(SkillCatalog::builtin()),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "careercompass-api");
    }

    #[tokio::test]
    async fn test_dashboard_for_agri_profile() {
        let (status, body) = send(post_json(
            "/api/v1/dashboard",
            json!({"name": "Ada", "title": "AGRI Engineer", "skills": ["Sustainability"]}),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["archetype"], "agri");
        assert_eq!(body["skill_matrix"].as_array().unwrap().len(), 6);
        assert_eq!(body["skill_matrix"][2]["subject"], "Sustainability");
        assert_eq!(body["skill_matrix"][2]["score"], 135);
        assert_eq!(body["skill_matrix"][2]["scale_max"], 150);
        assert_eq!(body["directives"][2]["priority"], "LOW");
        assert_eq!(body["career_path"][0]["role"], "Autonomous Farm Systems Lead");
        assert!(body["insight"].as_str().unwrap().contains("Operative Ada,"));
    }

    #[tokio::test]
    async fn test_dashboard_accepts_name_only() {
        let (status, body) = send(post_json("/api/v1/dashboard", json!({"name": "Ada"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["archetype"], "generalist");
    }

    #[tokio::test]
    async fn test_dashboard_accepts_null_skills() {
        let (status, body) = send(post_json(
            "/api/v1/dashboard",
            json!({"name": "Ada", "title": "Urban Planner", "skills": null}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["archetype"], "urban");
        assert_eq!(body["skill_matrix"][0]["score"], 140);
    }

    #[tokio::test]
    async fn test_directive_wire_fields() {
        let (_, body) = send(post_json("/api/v1/dashboard", json!({"name": "Ada"}))).await;
        let directive = &body["directives"][2];
        assert_eq!(directive["description"], "Update Skill Profile with new Cert");
        assert_eq!(directive["estimated_duration"], "5m");
        assert!(directive.get("task").is_none());
        assert!(directive.get("time").is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_json_validation_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/dashboard")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\": \"Ada\""))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].is_string());
    }

    #[tokio::test]
    async fn test_wrong_shape_is_a_json_validation_error() {
        let (status, body) = send(post_json(
            "/api/v1/profile/skills",
            json!({"profile": {"name": "Ada"}, "add": "SQL"}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_dashboard_rejects_blank_name() {
        let (status, body) = send(post_json("/api/v1/dashboard", json!({"name": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_archetype_endpoint() {
        let (status, body) = send(post_json(
            "/api/v1/dashboard/archetype",
            json!({"name": "", "title": "bio urban"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"archetype": "bio"}));
    }

    #[tokio::test]
    async fn test_list_and_get_domains() {
        let (status, body) = send(get_req("/api/v1/catalog/domains")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);

        let (status, body) = send(get_req("/api/v1/catalog/domains/smart_city")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Smart Urban Systems");

        let (status, body) = send(get_req("/api/v1/catalog/domains/marine")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_skill_search_and_lookup() {
        let (status, body) = send(get_req("/api/v1/catalog/skills?q=gis&category=analytics")).await;
        assert_eq!(status, StatusCode::OK);
        let hits = body.as_array().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["skill"]["id"], "sc_2");
        assert_eq!(hits[0]["proficiency"], "Advanced");

        let (status, body) = send(get_req("/api/v1/catalog/skills/cs_4")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rating"], 5);

        let (status, _) = send(get_req("/api/v1/catalog/skills/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_rated_skills() {
        let (status, body) = send(get_req("/api/v1/catalog/ratings")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_profile_suggestions_and_edits() {
        let (status, body) = send(post_json(
            "/api/v1/profile/suggestions",
            json!({
                "name": "John Doe",
                "title": "Software Engineer",
                "skills": ["React", "Node.js", "Python"]
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggestions"], json!(["SQL", "System Design"]));

        let (status, body) = send(post_json(
            "/api/v1/profile/skills",
            json!({
                "profile": {"name": "John Doe", "title": "Software Engineer", "skills": ["React"]},
                "add": ["SQL"],
                "remove": ["React"]
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["skills"], json!(["SQL"]));
        assert_eq!(body["added"], json!(["SQL"]));
        assert_eq!(body["removed"], json!(["React"]));
        assert_eq!(
            body["suggestions"],
            json!(["React", "Node.js", "Python", "System Design"])
        );
    }

    #[tokio::test]
    async fn test_quiz_catalog_and_questions() {
        let (status, body) = send(get_req("/api/v1/quiz/skills")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["skill_name"], "Python");
        assert_eq!(body[0]["difficulties"], json!(["Beginner", "Intermediate", "Advanced"]));

        let (status, body) =
            send(get_req("/api/v1/quiz/questions?skill=Python&difficulty=Advanced")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question_count"], 3);
        assert_eq!(body["questions"][1]["topic"], "Threading");
        assert!(body["questions"][0].get("correct").is_none());

        let (status, body) = send(get_req("/api/v1/quiz/questions?skill=JavaScript")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["difficulty_level"], "Beginner");

        let (status, body) = send(get_req("/api/v1/quiz/questions?skill=Cobol")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, body) =
            send(get_req("/api/v1/quiz/questions?skill=Python&difficulty=Expert")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_grade_quiz() {
        let (status, body) = send(post_json(
            "/api/v1/quiz/grade",
            json!({
                "skill_name": "Data Science",
                "difficulty_level": "Beginner",
                "current_level": 3,
                "answers": [
                    {"question_id": "q_ds_b_1", "selected_option_index": 1},
                    {"question_id": "q_ds_b_2", "selected_option_index": 2}
                ]
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 50.0);
        assert_eq!(body["passed"], false);
        assert_eq!(body["performance_summary"], "Needs Improvement");
        assert_eq!(body["skill_gap"]["required_level"], 5);
        assert_eq!(body["skill_gap"]["proficiency"], "Beginner");

        let (status, _) = send(post_json(
            "/api/v1/quiz/grade",
            json!({
                "skill_name": "Data Science",
                "difficulty_level": "Beginner",
                "current_level": 11,
                "answers": []
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_skill_gaps_and_recommendations() {
        let progress = json!({
            "scores": [
                {"skill_name": "Python", "score": 40.0},
                {"skill_name": "JavaScript", "score": 90.0}
            ],
            "skill_levels": {"Python": 2, "JavaScript": 7}
        });

        let (status, body) = send(post_json("/api/v1/skills/gaps", progress.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_skills_assessed"], 2);
        assert_eq!(body["top_priority_skills"], json!(["Python"]));
        assert_eq!(body["skill_gaps"][0]["gap_level"], 3);

        let (status, body) = send(post_json("/api/v1/courses/recommendations", progress)).await;
        assert_eq!(status, StatusCode::OK);
        let recs = body.as_array().unwrap();
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[0]["course"]["id"], "crs_python_internals");
        assert!(recs[0]["match_reason"]
            .as_str()
            .unwrap()
            .contains("(Current: 2/10, Required: 5/10)"));

        let (status, body) = send(post_json(
            "/api/v1/skills/gaps",
            json!({"scores": [{"skill_name": "Python", "score": 140.0}]}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_course_listing_and_lookup() {
        let (status, body) = send(get_req("/api/v1/courses?difficulty=Advanced")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_count"], 4);

        let (status, body) = send(get_req("/api/v1/courses/crs_rust_embedded")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Rust for Embedded Systems 101");

        let (status, _) = send(get_req("/api/v1/courses/crs_nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_assessment_feedback() {
        let (status, body) =
            send(post_json("/api/v1/assessments/feedback", json!({"score": 85}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["passed"], true);
        assert_eq!(body["recommended_actions"][0], "Advanced Certification");

        let (status, _) =
            send(post_json("/api/v1/assessments/feedback", json!({"score": 101}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
