use crate::application::errors::CatalogResult;
use crate::application::ports::question_repository::QuestionRepository;
use crate::domain::trivia::question::NewQuestion;

pub struct CreateQuestion<'a, R: QuestionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: QuestionRepository + ?Sized> CreateQuestion<'a, R> {
    /// The category id is stored as given; it is not checked against the
    /// category table.
    pub async fn execute(&self, question: NewQuestion) -> CatalogResult<i32> {
        Ok(self.repo.insert(question).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::fixtures::{question, sample_catalog};

    #[tokio::test]
    async fn created_question_gets_unseen_id() {
        let catalog = sample_catalog();
        let uc = CreateQuestion { repo: &catalog };
        let id = uc
            .execute(question("Test question", "Test answer", 1, 1))
            .await
            .unwrap();
        assert_eq!(id, 17);
        let stored = catalog.question(id).await.unwrap();
        assert_eq!(stored.question, "Test question");
        assert_eq!(stored.category, 1);
    }

    #[tokio::test]
    async fn unknown_category_is_accepted() {
        let catalog = sample_catalog();
        let id = CreateQuestion { repo: &catalog }
            .execute(question("Dangling?", "Sure", 42, 3))
            .await
            .unwrap();
        assert_eq!(catalog.question(id).await.unwrap().category, 42);
    }
}
