//! Category endpoints

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::PathId;
use crate::http::state::AppState;
use crate::models::{CategoryMap, PageParams, Pagination, Question};

/// Category listing response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// Questions of one category
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// GET /categories - every category as `{id: type}`
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.repo().list_categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: categories.into(),
    }))
}

/// GET /categories/{id}/questions - paginated questions of a category
///
/// Any failure on this route is reported as 404.
async fn category_questions(
    State(state): State<AppState>,
    PathId(id): PathId,
    Query(params): Query<PageParams>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let repo = state.repo();
    let questions = repo
        .questions_by_category(id)
        .await
        .map_err(ApiError::not_found)?;

    if questions.is_empty() {
        return Err(ApiError::not_found(format!("category {} has no questions", id)));
    }

    let category = repo
        .find_category(id)
        .await
        .map_err(ApiError::not_found)?
        .ok_or_else(|| ApiError::not_found(format!("category {} does not exist", id)))?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: Pagination::from(params).slice(&questions),
        total_questions: questions.len(),
        current_category: category.kind,
    }))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
}
