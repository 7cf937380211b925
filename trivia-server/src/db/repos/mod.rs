//! Repository implementations for database access
//!
//! Each PostgreSQL repository borrows the pool and issues typed,
//! fixed SQL. `PgRepository` stitches them together behind the
//! `TriviaRepository` trait the HTTP layer depends on.

pub mod categories;
pub mod questions;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Category, NewQuestion, Question};

pub use categories::CategoryRepo;
pub use questions::QuestionRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid reference: {resource} '{id}' does not exist")]
    MissingReference { resource: &'static str, id: String },
}

/// Storage operations behind the trivia API
#[async_trait]
pub trait TriviaRepository: Send + Sync {
    /// All categories ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, DbError>;

    async fn find_category(&self, id: i64) -> Result<Option<Category>, DbError>;

    /// Only used when seeding; the API never creates categories.
    async fn insert_category(&self, kind: &str) -> Result<Category, DbError>;

    /// All questions ordered by id ascending.
    async fn list_questions(&self) -> Result<Vec<Question>, DbError>;

    async fn count_questions(&self) -> Result<usize, DbError>;

    async fn find_question(&self, id: i64) -> Result<Option<Question>, DbError>;

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, DbError>;

    /// Fails with `DbError::NotFound` when no row has this id.
    async fn delete_question(&self, id: i64) -> Result<(), DbError>;

    /// Case-insensitive substring match on the question text, ordered by id.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError>;

    async fn questions_by_category(&self, category: i64) -> Result<Vec<Question>, DbError>;

    /// Questions not in `exclude`, limited to `category` when given.
    async fn quiz_candidates(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, DbError>;
}

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaRepository for PgRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn find_category(&self, id: i64) -> Result<Option<Category>, DbError> {
        CategoryRepo::new(&self.pool).find(id).await
    }

    async fn insert_category(&self, kind: &str) -> Result<Category, DbError> {
        CategoryRepo::new(&self.pool).insert(kind).await
    }

    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list().await
    }

    async fn count_questions(&self) -> Result<usize, DbError> {
        QuestionRepo::new(&self.pool).count().await
    }

    async fn find_question(&self, id: i64) -> Result<Option<Question>, DbError> {
        QuestionRepo::new(&self.pool).find(id).await
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).insert(question).await
    }

    async fn delete_question(&self, id: i64) -> Result<(), DbError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).search(term).await
    }

    async fn questions_by_category(&self, category: i64) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).by_category(category).await
    }

    async fn quiz_candidates(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool)
            .quiz_candidates(category, exclude)
            .await
    }
}
