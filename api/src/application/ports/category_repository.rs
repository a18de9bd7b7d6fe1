use async_trait::async_trait;

use crate::domain::trivia::category::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id.
    async fn list_all(&self) -> anyhow::Result<Vec<Category>>;

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Category>>;
}
