use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::category_repository::CategoryRepository;
use crate::application::ports::question_repository::QuestionRepository;
use crate::domain::trivia::category::Category;
use crate::domain::trivia::page::{Page, PageRequest};
use crate::domain::trivia::question::{NewQuestion, Question, QuizScope};

#[derive(Default)]
struct CatalogState {
    categories: BTreeMap<i32, Category>,
    // keyed by id so iteration follows ascending id
    questions: BTreeMap<i32, Question>,
    last_question_id: i32,
}

/// Process-local catalog store. Backs `STORE_BACKEND=memory` and the tests.
#[derive(Default)]
pub struct InMemoryCatalog {
    state: RwLock<CatalogState>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, id: i32, kind: &str) -> Self {
        self.state.get_mut().categories.insert(
            id,
            Category {
                id,
                kind: kind.to_string(),
            },
        );
        self
    }

    pub fn with_question(mut self, question: NewQuestion) -> Self {
        let state = self.state.get_mut();
        state.last_question_id += 1;
        let id = state.last_question_id;
        state.questions.insert(id, question.with_id(id));
        self
    }

    pub async fn question(&self, id: i32) -> Option<Question> {
        self.state.read().await.questions.get(&id).cloned()
    }

    fn matching<F>(state: &CatalogState, pred: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        state.questions.values().filter(|q| pred(q)).cloned().collect()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn list_all(&self) -> anyhow::Result<Vec<Category>> {
        Ok(self.state.read().await.categories.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Category>> {
        Ok(self.state.read().await.categories.get(&id).cloned())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryCatalog {
    async fn list_page(&self, page: PageRequest) -> anyhow::Result<Page<Question>> {
        let state = self.state.read().await;
        let all = Self::matching(&state, |_| true);
        Ok(Page::from_slice(&all, page))
    }

    async fn insert(&self, question: NewQuestion) -> anyhow::Result<i32> {
        let mut state = self.state.write().await;
        state.last_question_id += 1;
        let id = state.last_question_id;
        state.questions.insert(id, question.with_id(id));
        Ok(id)
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        Ok(self.state.write().await.questions.remove(&id).is_some())
    }

    async fn search(&self, term: &str, page: PageRequest) -> anyhow::Result<Page<Question>> {
        let needle = term.to_lowercase();
        let state = self.state.read().await;
        let hits = Self::matching(&state, |q| q.question.to_lowercase().contains(&needle));
        Ok(Page::from_slice(&hits, page))
    }

    async fn list_by_category(
        &self,
        category_id: i32,
        page: PageRequest,
    ) -> anyhow::Result<Page<Question>> {
        let state = self.state.read().await;
        let hits = Self::matching(&state, |q| q.category == category_id);
        Ok(Page::from_slice(&hits, page))
    }

    async fn quiz_candidates(
        &self,
        scope: QuizScope,
        exclude: &[i32],
    ) -> anyhow::Result<Vec<Question>> {
        let state = self.state.read().await;
        Ok(Self::matching(&state, |q| {
            let in_scope = match scope {
                QuizScope::Any => true,
                QuizScope::Category(id) => q.category == id,
            };
            in_scope && !exclude.contains(&q.id)
        }))
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{question, sample_catalog};
    use super::*;

    #[tokio::test]
    async fn insert_assigns_fresh_ids_after_deletes() {
        let catalog = sample_catalog();
        assert!(catalog.delete(16).await.unwrap());
        let id = catalog.insert(question("New?", "Yes", 1, 1)).await.unwrap();
        assert_eq!(id, 17);
        assert!(catalog.question(16).await.is_none());
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let catalog = sample_catalog();
        let hits = catalog.search("VAN GOGH", PageRequest::first()).await.unwrap();
        assert_eq!(hits.total, 1);
        assert_eq!(hits.items[0].answer, "One");
    }

    #[tokio::test]
    async fn quiz_candidates_honor_scope_and_exclusions() {
        let catalog = sample_catalog();
        let art = catalog
            .quiz_candidates(QuizScope::Category(2), &[13])
            .await
            .unwrap();
        let ids: Vec<i32> = art.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![14, 15]);

        let any = catalog.quiz_candidates(QuizScope::Any, &[]).await.unwrap();
        assert_eq!(any.len(), 16);
    }
}
