use sqlx::PgPool;

use crate::models::region::Region;
use crate::utils::errors::AppError;

pub struct RegionRepository {
    pool: PgPool,
}

impl RegionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Region>, AppError> {
        let regions = sqlx::query_as::<_, Region>("SELECT * FROM regions ORDER BY region")
            .fetch_all(&self.pool)
            .await?;

        Ok(regions)
    }
}
