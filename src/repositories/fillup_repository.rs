use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::fillup::{Fillup, FillupItem};
use crate::utils::errors::AppError;

pub struct FillupRepository {
    pool: PgPool,
}

impl FillupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persistir un fillup con sus items como JSONB. Append-only.
    pub async fn create(
        &self,
        journey_id: Uuid,
        salesman_id: Uuid,
        items: Vec<FillupItem>,
    ) -> Result<Fillup, AppError> {
        let fillup = sqlx::query_as::<_, Fillup>(
            r#"
            INSERT INTO fillups (id, journey_id, salesman_id, items, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(journey_id)
        .bind(salesman_id)
        .bind(Json(items))
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(fillup)
    }

    /// Fillups históricos del vendedor, más-reciente-primero
    pub async fn find_by_salesman(&self, salesman_id: Uuid) -> Result<Vec<Fillup>, AppError> {
        let fillups = sqlx::query_as::<_, Fillup>(
            r#"
            SELECT * FROM fillups
            WHERE salesman_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(salesman_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(fillups)
    }
}
