use sqlx::PgPool;
use uuid::Uuid;

use crate::models::product::Product;
use crate::utils::errors::AppError;

pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Productos por id, para resolver metadata de display de un fillup
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE id = ANY($1)"
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}
