use crate::application::errors::{CatalogError, CatalogResult};
use crate::application::ports::category_repository::CategoryRepository;
use crate::application::ports::question_repository::QuestionRepository;
use crate::domain::trivia::category::Category;
use crate::domain::trivia::page::{Page, PageRequest};
use crate::domain::trivia::question::Question;

#[derive(Debug, Clone)]
pub struct CategoryQuestions {
    pub category: Category,
    pub page: Page<Question>,
}

pub struct ListCategoryQuestions<'a, C, Q>
where
    C: CategoryRepository + ?Sized,
    Q: QuestionRepository + ?Sized,
{
    pub categories: &'a C,
    pub questions: &'a Q,
}

impl<'a, C, Q> ListCategoryQuestions<'a, C, Q>
where
    C: CategoryRepository + ?Sized,
    Q: QuestionRepository + ?Sized,
{
    /// First page of the category's questions; an unknown category is not found
    /// even when questions reference its id.
    pub async fn execute(&self, category_id: i32) -> CatalogResult<CategoryQuestions> {
        let category = self
            .categories
            .get_by_id(category_id)
            .await?
            .ok_or(CatalogError::NotFound("category"))?;
        let page = self
            .questions
            .list_by_category(category.id, PageRequest::first())
            .await?;
        Ok(CategoryQuestions { category, page })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::fixtures::{question, sample_catalog};

    #[tokio::test]
    async fn first_ten_of_category_with_full_total() {
        let catalog = sample_catalog();
        let uc = ListCategoryQuestions {
            categories: &catalog,
            questions: &catalog,
        };
        let out = uc.execute(1).await.unwrap();
        assert_eq!(out.category.kind, "Science");
        assert_eq!(out.page.items.len(), 10);
        assert_eq!(out.page.total, 12);
        assert!(out.page.items.iter().all(|q| q.category == 1));
    }

    #[tokio::test]
    async fn existing_category_without_questions_is_empty() {
        let catalog = sample_catalog();
        let uc = ListCategoryQuestions {
            categories: &catalog,
            questions: &catalog,
        };
        let out = uc.execute(6).await.unwrap();
        assert!(out.page.items.is_empty());
        assert_eq!(out.page.total, 0);
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let catalog = sample_catalog().with_question(question("Orphan?", "Yes", 100000, 1));
        let uc = ListCategoryQuestions {
            categories: &catalog,
            questions: &catalog,
        };
        let err = uc.execute(100000).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound("category")));
    }
}
