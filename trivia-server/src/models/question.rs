//! Question records and the validated insert payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{LooseInt, ValidationError};

/// Question as stored and as returned to the frontend
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// Validated question ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Build from optional request fields; every field is required.
    ///
    /// Empty strings are accepted as-is.
    pub fn from_parts(
        question: Option<String>,
        answer: Option<String>,
        difficulty: Option<LooseInt>,
        category: Option<LooseInt>,
    ) -> Result<Self, ValidationError> {
        let question = question.ok_or(ValidationError::Missing { field: "question" })?;
        let answer = answer.ok_or(ValidationError::Missing { field: "answer" })?;
        let difficulty = difficulty.ok_or(ValidationError::Missing {
            field: "difficulty",
        })?;
        let category = category.ok_or(ValidationError::Missing { field: "category" })?;

        let difficulty =
            i32::try_from(difficulty.get()).map_err(|_| ValidationError::OutOfRange {
                field: "difficulty",
                value: difficulty.get(),
            })?;

        Ok(Self {
            question,
            answer,
            category: category.get(),
            difficulty,
        })
    }

    /// Attach the id assigned by the store.
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_complete_parts() {
        let q = NewQuestion::from_parts(
            Some("What is the heaviest organ?".into()),
            Some("The liver".into()),
            Some(LooseInt(4)),
            Some(LooseInt(1)),
        )
        .unwrap();

        assert_eq!(q.difficulty, 4);
        assert_eq!(q.category, 1);
        assert_eq!(q.with_id(9).id, 9);
    }

    #[test]
    fn reports_first_missing_field() {
        let err = NewQuestion::from_parts(Some("q".into()), None, None, Some(LooseInt(1)))
            .unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "answer" });

        let err = NewQuestion::from_parts(None, None, None, None).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "question" });
    }

    #[test]
    fn rejects_oversized_difficulty() {
        let err = NewQuestion::from_parts(
            Some("q".into()),
            Some("a".into()),
            Some(LooseInt(i64::MAX)),
            Some(LooseInt(1)),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn serializes_frontend_shape() {
        let json = serde_json::to_value(Question {
            id: 5,
            question: "Who discovered penicillin?".into(),
            answer: "Alexander Fleming".into(),
            category: 1,
            difficulty: 3,
        })
        .unwrap();

        assert_eq!(json["id"], 5);
        assert_eq!(json["category"], 1);
        assert_eq!(json["difficulty"], 3);
    }
}
