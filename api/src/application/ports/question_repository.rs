use async_trait::async_trait;

use crate::domain::trivia::page::{Page, PageRequest};
use crate::domain::trivia::question::{NewQuestion, Question, QuizScope};

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Window over every question, ordered by ascending id.
    async fn list_page(&self, page: PageRequest) -> anyhow::Result<Page<Question>>;

    /// Returns the id assigned by the store.
    async fn insert(&self, question: NewQuestion) -> anyhow::Result<i32>;

    // false when no row had that id
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;

    /// Case-insensitive substring match on the question text. Wildcard
    /// characters in `term` match literally; an empty term matches everything.
    async fn search(&self, term: &str, page: PageRequest) -> anyhow::Result<Page<Question>>;

    async fn list_by_category(
        &self,
        category_id: i32,
        page: PageRequest,
    ) -> anyhow::Result<Page<Question>>;

    async fn quiz_candidates(
        &self,
        scope: QuizScope,
        exclude: &[i32],
    ) -> anyhow::Result<Vec<Question>>;
}
