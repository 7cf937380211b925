//! Question repository
//!
//! All list queries order by id so pages are stable between requests.

use sqlx::PgPool;

use super::DbError;
use crate::models::{NewQuestion, Question};

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn count(&self) -> Result<usize, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(self.pool)
            .await?;

        Ok(usize::try_from(count).unwrap_or_default())
    }

    pub async fn find(&self, id: i64) -> Result<Option<Question>, DbError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(question)
    }

    /// Insert a question, mapping an unknown category onto `MissingReference`.
    pub async fn insert(&self, new: NewQuestion) -> Result<Question, DbError> {
        let category = new.category;
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new.question)
        .bind(new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                DbError::MissingReference {
                    resource: "category",
                    id: category.to_string(),
                }
            }
            _ => DbError::Sqlx(e),
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            });
        }

        Ok(())
    }

    /// ILIKE with the term's own wildcards escaped.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let pattern = format!("%{}%", escape_like(term));
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn by_category(&self, category: i64) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn quiz_candidates(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::BIGINT IS NULL OR category = $1)
              AND NOT (id = ANY($2))
            ORDER BY id
            "#,
        )
        .bind(category)
        .bind(exclude.to_vec())
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }
}

/// Escape `\`, `%` and `_` so the term matches literally inside LIKE.
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::CategoryRepo;
    use crate::db::{create_pool, migrations};

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(escape_like("palace"), "palace");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }

    // Integration tests - run with DATABASE_URL set
    // cargo test -p trivia-server -- --ignored

    async fn setup() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_delete_roundtrip() {
        let pool = setup().await;
        let category = CategoryRepo::new(&pool).insert("Science").await.unwrap();
        let repo = QuestionRepo::new(&pool);

        let created = repo
            .insert(NewQuestion {
                question: "What is the heaviest organ in the human body?".into(),
                answer: "The Liver".into(),
                category: category.id,
                difficulty: 4,
            })
            .await
            .unwrap();

        assert_eq!(repo.find(created.id).await.unwrap(), Some(created.clone()));

        repo.delete(created.id).await.unwrap();
        assert!(repo.find(created.id).await.unwrap().is_none());

        let err = repo.delete(created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_with_unknown_category_fails() {
        let pool = setup().await;
        let err = QuestionRepo::new(&pool)
            .insert(NewQuestion {
                question: "Orphan?".into(),
                answer: "Yes".into(),
                category: i64::MAX,
                difficulty: 1,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::MissingReference { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn quiz_candidates_skip_excluded() {
        let pool = setup().await;
        let category = CategoryRepo::new(&pool).insert("Art").await.unwrap();
        let repo = QuestionRepo::new(&pool);

        let mut ids = Vec::new();
        for n in 0..3 {
            let q = repo
                .insert(NewQuestion {
                    question: format!("Art question {}", n),
                    answer: "A".into(),
                    category: category.id,
                    difficulty: 1,
                })
                .await
                .unwrap();
            ids.push(q.id);
        }

        let candidates = repo
            .quiz_candidates(Some(category.id), &ids[..2])
            .await
            .unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, ids[2]);
    }
}
