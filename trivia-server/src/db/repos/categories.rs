//! Category repository

use sqlx::PgPool;

use super::DbError;
use crate::models::Category;

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"SELECT id, "type" FROM categories ORDER BY id"#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Category>, DbError> {
        let category = sqlx::query_as::<_, Category>(
            r#"SELECT id, "type" FROM categories WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    pub async fn insert(&self, kind: &str) -> Result<Category, DbError> {
        let category = sqlx::query_as::<_, Category>(
            r#"INSERT INTO categories ("type") VALUES ($1) RETURNING id, "type""#,
        )
        .bind(kind)
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }
}
