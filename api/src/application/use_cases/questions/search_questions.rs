use crate::application::errors::CatalogResult;
use crate::application::ports::question_repository::QuestionRepository;
use crate::domain::trivia::page::{Page, PageRequest};
use crate::domain::trivia::question::Question;

pub struct SearchQuestions<'a, R: QuestionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: QuestionRepository + ?Sized> SearchQuestions<'a, R> {
    /// First page of matches. Zero matches is an empty page, not an error.
    pub async fn execute(&self, term: &str) -> CatalogResult<Page<Question>> {
        Ok(self.repo.search(term, PageRequest::first()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::fixtures::sample_catalog;

    #[tokio::test]
    async fn total_counts_beyond_first_page() {
        let catalog = sample_catalog();
        let hits = SearchQuestions { repo: &catalog }
            .execute("science")
            .await
            .unwrap();
        assert_eq!(hits.items.len(), 10);
        assert_eq!(hits.total, 12);
    }

    #[tokio::test]
    async fn empty_term_matches_everything() {
        let catalog = sample_catalog();
        let hits = SearchQuestions { repo: &catalog }.execute("").await.unwrap();
        assert_eq!(hits.total, 16);
    }

    #[tokio::test]
    async fn no_match_is_empty() {
        let catalog = sample_catalog();
        let hits = SearchQuestions { repo: &catalog }
            .execute("zzzz")
            .await
            .unwrap();
        assert!(hits.items.is_empty());
        assert_eq!(hits.total, 0);
    }
}
