//! Question endpoints: list, create, delete, search
//!
//! Failures collapse to one status per route: listing and creating
//! report 422, deleting and searching report 404.

use axum::{
    extract::{Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::SuccessResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, PathId, StrictJson};
use crate::http::state::AppState;
use crate::models::{CategoryMap, LooseInt, NewQuestion, PageParams, Pagination, Question};

/// Create question request; presence is checked after decoding
#[derive(Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<LooseInt>,
    pub category: Option<LooseInt>,
}

/// Search request as sent by the frontend
#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// GET /questions response
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// POST /questions response
#[derive(Serialize)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// POST /questions/search response
#[derive(Serialize)]
pub struct QuestionSearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// GET /questions - one page of all questions plus the category map
async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let repo = state.repo();
    let questions = repo.list_questions().await.map_err(ApiError::unprocessable)?;

    let page = Pagination::from(params);
    let current = page.slice(&questions);
    if current.is_empty() {
        return Err(ApiError::not_found(format!(
            "page {} is empty ({} questions)",
            page.page,
            questions.len()
        )));
    }

    let categories = repo
        .list_categories()
        .await
        .map_err(ApiError::unprocessable)?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: current,
        total_questions: questions.len(),
        categories: categories.into(),
    }))
}

/// POST /questions - create a question, answer with the refreshed first page
async fn create_question(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<Json<QuestionCreatedResponse>, ApiError> {
    let new = NewQuestion::from_parts(req.question, req.answer, req.difficulty, req.category)?;

    let repo = state.repo();
    let created = repo
        .insert_question(new)
        .await
        .map_err(ApiError::unprocessable)?;
    tracing::info!(id = created.id, category = created.category, "Question created");

    let questions = repo.list_questions().await.map_err(ApiError::unprocessable)?;

    Ok(Json(QuestionCreatedResponse {
        success: true,
        created: created.id,
        questions: Pagination::from(params).slice(&questions),
        total_questions: questions.len(),
    }))
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<SuccessResponse>, ApiError> {
    let repo = state.repo();
    repo.find_question(id)
        .await
        .map_err(ApiError::not_found)?
        .ok_or_else(|| ApiError::not_found(format!("question {} does not exist", id)))?;

    repo.delete_question(id).await.map_err(ApiError::not_found)?;
    tracing::info!(id, "Question deleted");

    Ok(Json(SuccessResponse { success: true }))
}

/// POST /questions/search - case-insensitive substring search
async fn search_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    StrictJson(req): StrictJson<SearchRequest>,
) -> Result<Json<QuestionSearchResponse>, ApiError> {
    let matches = state
        .repo()
        .search_questions(&req.search_term)
        .await
        .map_err(ApiError::not_found)?;

    if matches.is_empty() {
        return Err(ApiError::not_found(format!(
            "no question matches '{}'",
            req.search_term
        )));
    }

    Ok(Json(QuestionSearchResponse {
        success: true,
        questions: Pagination::from(params).slice(&matches),
        total_questions: matches.len(),
    }))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;

    use crate::db::TriviaRepository;
    use crate::http::routes::test_support::TestApp;

    #[tokio::test]
    async fn first_page_by_default() {
        let app = TestApp::seeded().await;
        let total = app.question_count().await;
        let (status, body) = app.get("/questions").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["questions"].as_array().unwrap().len(), 10);
        assert_eq!(body["total_questions"], total);
        assert_eq!(body["categories"]["3"], "Geography");
        assert_eq!(body["questions"][0]["id"], 1);
    }

    #[tokio::test]
    async fn second_page_continues_by_id() {
        let app = TestApp::seeded().await;
        let (status, body) = app.get("/questions?page=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["questions"][0]["id"], 11);
    }

    #[tokio::test]
    async fn page_beyond_last_is_404() {
        let app = TestApp::seeded().await;
        let (status, body) = app.get("/questions?page=1000").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "not found");
    }

    #[tokio::test]
    async fn no_questions_is_404() {
        let app = TestApp::empty();
        let (status, _) = app.get("/questions").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_page_falls_back_to_first() {
        let app = TestApp::seeded().await;
        let (status, body) = app.get("/questions?page=abc").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["questions"][0]["id"], 1);
    }

    #[tokio::test]
    async fn create_adds_exactly_one() {
        let app = TestApp::seeded().await;
        let before = app.question_count().await;

        let (status, body) = app
            .post_json(
                "/questions",
                json!({
                    "question": "This is a test question",
                    "answer": "Hope it passes!",
                    "category": 1,
                    "difficulty": 1
                }),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["total_questions"], before + 1);

        let id = body["created"].as_i64().unwrap();
        let stored = app.repo.find_question(id).await.unwrap().unwrap();
        assert_eq!(stored.answer, "Hope it passes!");
    }

    #[tokio::test]
    async fn create_accepts_string_category() {
        let app = TestApp::seeded().await;
        let (status, body) = app
            .post_json(
                "/questions",
                json!({
                    "question": "Q",
                    "answer": "A",
                    "category": "2",
                    "difficulty": 3
                }),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        let id = body["created"].as_i64().unwrap();
        assert_eq!(app.repo.find_question(id).await.unwrap().unwrap().category, 2);
    }

    #[tokio::test]
    async fn create_with_missing_field_is_422() {
        let app = TestApp::seeded().await;
        let before = app.repo.list_questions().await.unwrap();

        let (status, body) = app.post_json("/questions", json!({})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);

        let (status, _) = app
            .post_json(
                "/questions",
                json!({"question": "Q", "answer": "A", "category": 1}),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(app.repo.list_questions().await.unwrap(), before);
    }

    #[tokio::test]
    async fn create_with_unknown_category_is_422() {
        let app = TestApp::seeded().await;
        let before = app.question_count().await;

        let (status, _) = app
            .post_json(
                "/questions",
                json!({"question": "Q", "answer": "A", "category": 999, "difficulty": 1}),
            )
            .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(app.question_count().await, before);
    }

    #[tokio::test]
    async fn create_with_wrong_types_is_422() {
        let app = TestApp::seeded().await;
        let (status, _) = app
            .post_json(
                "/questions",
                json!({"question": "Q", "answer": "A", "category": "art", "difficulty": 1}),
            )
            .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_with_non_json_body_is_422() {
        let app = TestApp::seeded().await;
        let before = app.question_count().await;

        let (status, body) = app
            .send(
                Request::builder()
                    .method("POST")
                    .uri("/questions")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], 422);
        assert_eq!(body["message"], "unprocessable");

        let (status, _) = app
            .send(
                Request::builder()
                    .method("POST")
                    .uri("/questions")
                    .body(Body::from(r#"{"question": "Q"}"#))
                    .unwrap(),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(app.question_count().await, before);
    }

    #[tokio::test]
    async fn delete_removes_question() {
        let app = TestApp::seeded().await;
        let id = app.add_question("To be deleted", 1).await;
        let before = app.question_count().await;

        let (status, body) = app.delete(&format!("/questions/{}", id)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(app.question_count().await, before - 1);
        assert!(app.repo.find_question(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_missing_is_404() {
        let app = TestApp::seeded().await;
        let before = app.question_count().await;

        let (status, body) = app.delete("/questions/424242").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);

        let (status, _) = app.delete("/questions/abc").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        assert_eq!(app.question_count().await, before);
    }

    #[tokio::test]
    async fn search_matches_case_insensitively() {
        let app = TestApp::seeded().await;
        let (status, body) = app
            .post_json("/questions/search", json!({"searchTerm": "PALACE"}))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["total_questions"], 1);
        assert_eq!(body["questions"][0]["answer"], "The Palace of Versailles");
    }

    #[tokio::test]
    async fn search_counts_all_matches_but_pages_them() {
        let app = TestApp::seeded().await;
        for n in 0..11 {
            app.add_question(&format!("Needle number {}", n), 2).await;
        }

        let (status, body) = app
            .post_json("/questions/search", json!({"searchTerm": "needle"}))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_questions"], 11);
        assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn search_without_matches_is_404() {
        let app = TestApp::seeded().await;
        let (status, body) = app
            .post_json("/questions/search", json!({"searchTerm": "XAAAAAAA"}))
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "not found");
    }

    #[tokio::test]
    async fn search_with_non_json_body_is_400() {
        let app = TestApp::seeded().await;
        let (status, body) = app
            .send(
                Request::builder()
                    .method("POST")
                    .uri("/questions/search")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], 400);
        assert_eq!(body["message"], "bad request");
    }

    #[tokio::test]
    async fn search_without_term_is_422() {
        let app = TestApp::seeded().await;
        let (status, _) = app.post_json("/questions/search", json!({})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
