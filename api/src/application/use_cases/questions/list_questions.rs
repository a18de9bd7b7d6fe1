use crate::application::errors::{CatalogError, CatalogResult};
use crate::application::ports::category_repository::CategoryRepository;
use crate::application::ports::question_repository::QuestionRepository;
use crate::domain::trivia::category::Category;
use crate::domain::trivia::page::{Page, PageRequest};
use crate::domain::trivia::question::Question;

#[derive(Debug, Clone)]
pub struct QuestionListing {
    pub page: Page<Question>,
    pub categories: Vec<Category>,
}

pub struct ListQuestions<'a, Q, C>
where
    Q: QuestionRepository + ?Sized,
    C: CategoryRepository + ?Sized,
{
    pub questions: &'a Q,
    pub categories: &'a C,
}

impl<'a, Q, C> ListQuestions<'a, Q, C>
where
    Q: QuestionRepository + ?Sized,
    C: CategoryRepository + ?Sized,
{
    /// A page with no questions (including pages past the end) is not found.
    pub async fn execute(&self, page: PageRequest) -> CatalogResult<QuestionListing> {
        if !page.is_valid() {
            return Err(CatalogError::NotFound("page"));
        }
        let page = self.questions.list_page(page).await?;
        if page.items.is_empty() {
            return Err(CatalogError::NotFound("page"));
        }
        let categories = self.categories.list_all().await?;
        Ok(QuestionListing { page, categories })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::fixtures::sample_catalog;

    fn ids(listing: &QuestionListing) -> Vec<i32> {
        listing.page.items.iter().map(|q| q.id).collect()
    }

    #[tokio::test]
    async fn pages_are_ten_wide_in_id_order() {
        let catalog = sample_catalog();
        let uc = ListQuestions {
            questions: &catalog,
            categories: &catalog,
        };

        let first = uc.execute(PageRequest::new(1)).await.unwrap();
        assert_eq!(ids(&first), (1..=10).collect::<Vec<_>>());
        assert_eq!(first.page.total, 16);
        assert_eq!(first.categories.len(), 6);

        let second = uc.execute(PageRequest::new(2)).await.unwrap();
        assert_eq!(ids(&second), (11..=16).collect::<Vec<_>>());
        assert_eq!(second.page.total, 16);
    }

    #[tokio::test]
    async fn page_past_the_end_is_not_found() {
        let catalog = sample_catalog();
        let uc = ListQuestions {
            questions: &catalog,
            categories: &catalog,
        };
        for page in [3, 1000, 0, -1] {
            let err = uc.execute(PageRequest::new(page)).await.unwrap_err();
            assert!(matches!(err, CatalogError::NotFound("page")), "page {page}");
        }
    }
}
