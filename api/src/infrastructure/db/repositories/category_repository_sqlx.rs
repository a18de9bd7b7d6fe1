use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::category_repository::CategoryRepository;
use crate::domain::trivia::category::Category;
use crate::infrastructure::db::PgPool;

pub struct SqlxCategoryRepository {
    pub pool: PgPool,
}

impl SqlxCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqlxCategoryRepository {
    async fn list_all(&self) -> anyhow::Result<Vec<Category>> {
        let rows = sqlx::query(r#"SELECT id, type FROM categories ORDER BY id"#)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|r| Category {
                id: r.get("id"),
                kind: r.get("type"),
            })
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Category>> {
        let row = sqlx::query(r#"SELECT id, type FROM categories WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| Category {
            id: r.get("id"),
            kind: r.get("type"),
        }))
    }
}
