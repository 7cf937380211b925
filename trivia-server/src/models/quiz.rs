//! Quiz category selection

use serde::Deserialize;

use super::{LooseInt, ValidationError};

/// Category type the frontend sends when the player picks "ALL"
pub const ALL_CATEGORIES: &str = "click";

/// `quiz_category` as posted by the quiz view
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    /// Ignored for "click"
    #[serde(default)]
    pub id: Option<LooseInt>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl QuizCategory {
    /// Category to draw from, `None` meaning every category.
    pub fn filter(&self) -> Result<Option<i64>, ValidationError> {
        if self.kind == ALL_CATEGORIES {
            return Ok(None);
        }

        self.id
            .map(|id| Some(id.get()))
            .ok_or(ValidationError::Missing {
                field: "quiz_category.id",
            })
    }
}
