use crate::application::errors::{CatalogError, CatalogResult};
use crate::application::ports::category_repository::CategoryRepository;
use crate::domain::trivia::category::Category;

pub struct ListCategories<'a, R: CategoryRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CategoryRepository + ?Sized> ListCategories<'a, R> {
    pub async fn execute(&self) -> CatalogResult<Vec<Category>> {
        let categories = self.repo.list_all().await?;
        if categories.is_empty() {
            return Err(CatalogError::NotFound("categories"));
        }
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryCatalog;
    use crate::infrastructure::memory::fixtures::sample_catalog;

    #[tokio::test]
    async fn lists_every_category_in_id_order() {
        let catalog = sample_catalog();
        let out = ListCategories { repo: &catalog }.execute().await.unwrap();
        let ids: Vec<i32> = out.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(out[0].kind, "Science");
    }

    #[tokio::test]
    async fn empty_catalog_is_not_found() {
        let catalog = InMemoryCatalog::new();
        let err = ListCategories { repo: &catalog }.execute().await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }
}
