//! Quiz endpoint: draw the next unseen question

use axum::{extract::State, routing::post, Json, Router};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::state::AppState;
use crate::models::{Question, QuizCategory};

/// Quiz round request. The client tracks which questions were already
/// asked; the server keeps no quiz state.
#[derive(Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

/// Next question, `null` once the candidates run out
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// Uniform pick over the candidates, index in `[0, len)`.
pub fn pick_question<R: Rng + ?Sized>(candidates: &[Question], rng: &mut R) -> Option<Question> {
    candidates.choose(rng).cloned()
}

/// POST /quizzes
async fn next_question(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let category = req.quiz_category.filter()?;
    let candidates = state
        .repo()
        .quiz_candidates(category, &req.previous_questions)
        .await
        .map_err(ApiError::unprocessable)?;

    let question = pick_question(&candidates, &mut rand::thread_rng());
    tracing::debug!(
        candidates = candidates.len(),
        picked = ?question.as_ref().map(|q| q.id),
        "Quiz question drawn"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}
