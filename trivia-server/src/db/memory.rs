//! In-process repository
//!
//! Mirrors `PgRepository` semantics (id ordering, foreign key on
//! category, case-insensitive search) without a database. Used by the
//! router tests and by `trivia serve --in-memory`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::repos::{DbError, TriviaRepository};
use crate::models::{Category, NewQuestion, Question};

#[derive(Default)]
pub struct MemoryRepository {
    store: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    categories: Vec<Category>,
    questions: Vec<Question>,
    last_category_id: i64,
    last_question_id: i64,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TriviaRepository for MemoryRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        Ok(self.store.read().await.categories.clone())
    }

    async fn find_category(&self, id: i64) -> Result<Option<Category>, DbError> {
        let store = self.store.read().await;
        Ok(store.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn insert_category(&self, kind: &str) -> Result<Category, DbError> {
        let mut store = self.store.write().await;
        store.last_category_id += 1;
        let category = Category {
            id: store.last_category_id,
            kind: kind.to_owned(),
        };
        store.categories.push(category.clone());
        Ok(category)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        Ok(self.store.read().await.questions.clone())
    }

    async fn count_questions(&self) -> Result<usize, DbError> {
        Ok(self.store.read().await.questions.len())
    }

    async fn find_question(&self, id: i64) -> Result<Option<Question>, DbError> {
        let store = self.store.read().await;
        Ok(store.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, DbError> {
        let mut store = self.store.write().await;
        if !store.categories.iter().any(|c| c.id == question.category) {
            return Err(DbError::MissingReference {
                resource: "category",
                id: question.category.to_string(),
            });
        }

        store.last_question_id += 1;
        let question = question.with_id(store.last_question_id);
        store.questions.push(question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<(), DbError> {
        let mut store = self.store.write().await;
        let before = store.questions.len();
        store.questions.retain(|q| q.id != id);

        if store.questions.len() == before {
            return Err(DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let needle = term.to_lowercase();
        let store = self.store.read().await;
        Ok(store
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn questions_by_category(&self, category: i64) -> Result<Vec<Question>, DbError> {
        let store = self.store.read().await;
        Ok(store
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn quiz_candidates(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, DbError> {
        let store = self.store.read().await;
        Ok(store
            .questions
            .iter()
            .filter(|q| category.map_or(true, |c| q.category == c))
            .filter(|q| !exclude.contains(&q.id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: text.into(),
            answer: "answer".into(),
            category,
            difficulty: 1,
        }
    }

    async fn repo_with_categories() -> MemoryRepository {
        let repo = MemoryRepository::new();
        repo.insert_category("Science").await.unwrap();
        repo.insert_category("Art").await.unwrap();
        repo
    }

    #[tokio::test]
    async fn ids_increase_and_survive_deletes() {
        let repo = repo_with_categories().await;
        let a = repo.insert_question(new_question("a", 1)).await.unwrap();
        repo.delete_question(a.id).await.unwrap();
        let b = repo.insert_question(new_question("b", 1)).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(repo.count_questions().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn rejects_unknown_category() {
        let repo = repo_with_categories().await;
        let err = repo
            .insert_question(new_question("orphan", 42))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::MissingReference { .. }));
        assert!(repo.list_questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let repo = repo_with_categories().await;
        let err = repo.delete_question(7).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let repo = repo_with_categories().await;
        repo.insert_question(new_question("Hall of Mirrors PALACE", 1))
            .await
            .unwrap();
        repo.insert_question(new_question("Unrelated", 2))
            .await
            .unwrap();

        let hits = repo.search_questions("palace").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert!(repo.search_questions("castle").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn quiz_candidates_filter_category_and_exclusions() {
        let repo = repo_with_categories().await;
        let s1 = repo.insert_question(new_question("s1", 1)).await.unwrap();
        let s2 = repo.insert_question(new_question("s2", 1)).await.unwrap();
        let a1 = repo.insert_question(new_question("a1", 2)).await.unwrap();

        let science = repo.quiz_candidates(Some(1), &[s1.id]).await.unwrap();
        assert_eq!(science, vec![s2.clone()]);

        let all = repo.quiz_candidates(None, &[s2.id]).await.unwrap();
        assert_eq!(all, vec![s1, a1]);
    }
}
