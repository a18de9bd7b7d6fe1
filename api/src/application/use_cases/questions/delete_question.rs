use crate::application::errors::{CatalogError, CatalogResult};
use crate::application::ports::question_repository::QuestionRepository;

pub struct DeleteQuestion<'a, R: QuestionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: QuestionRepository + ?Sized> DeleteQuestion<'a, R> {
    pub async fn execute(&self, id: i32) -> CatalogResult<i32> {
        if self.repo.delete(id).await? {
            Ok(id)
        } else {
            Err(CatalogError::NotFound("question"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::fixtures::sample_catalog;

    #[tokio::test]
    async fn deleted_question_is_gone() {
        let catalog = sample_catalog();
        let uc = DeleteQuestion { repo: &catalog };
        assert_eq!(uc.execute(10).await.unwrap(), 10);
        assert!(catalog.question(10).await.is_none());

        let again = uc.execute(10).await.unwrap_err();
        assert!(matches!(again, CatalogError::NotFound("question")));
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let catalog = sample_catalog();
        let err = DeleteQuestion { repo: &catalog }
            .execute(1000)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }
}
