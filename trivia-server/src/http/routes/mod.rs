//! Route handlers organized by resource

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use serde::Serialize;

/// Envelope for endpoints that only report success
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}
