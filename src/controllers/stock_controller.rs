use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::cache::redis_client::RedisClient;
use crate::cache::CacheOperations;
use crate::dto::stock_dto::{StockQuery, StockSnapshotResponse};
use crate::models::stock::StockLine;
use crate::repositories::fillup_repository::FillupRepository;
use crate::repositories::salesman_repository::SalesmanRepository;
use crate::services::stock_ledger;
use crate::utils::errors::AppError;

pub struct StockController {
    fillups: FillupRepository,
    salesmen: SalesmanRepository,
    redis: RedisClient,
    cache_ttl: u64,
}

impl StockController {
    pub fn new(pool: PgPool, redis: RedisClient, cache_ttl: u64) -> Self {
        Self {
            fillups: FillupRepository::new(pool.clone()),
            salesmen: SalesmanRepository::new(pool),
            redis,
            cache_ttl,
        }
    }

    /// Snapshot de stock del vendedor, derivado de sus fillups.
    ///
    /// El snapshot completo se cachea por vendedor; el filtro de búsqueda
    /// se aplica después, sobre el snapshot. Un fallo de cache degrada a
    /// recalcular, nunca a error de request.
    pub async fn snapshot(
        &self,
        sales_id: Uuid,
        query: StockQuery,
    ) -> Result<StockSnapshotResponse, AppError> {
        self.salesmen
            .find_by_id(sales_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vendedor no encontrado".to_string()))?;

        let cache_key = self.redis.stock_key(sales_id);

        let (lines, cached) = match self.redis.get::<Vec<StockLine>>(&cache_key).await {
            Ok(Some(lines)) => (lines, true),
            Ok(None) => (self.recompute(sales_id, &cache_key).await?, false),
            Err(e) => {
                warn!("⚠️ Cache de stock no disponible: {}", e);
                (self.recompute(sales_id, &cache_key).await?, false)
            }
        };

        let lines = match query.q.as_deref() {
            Some(q) => stock_ledger::filter_lines(lines, q),
            None => lines,
        };

        Ok(StockSnapshotResponse {
            sales_id,
            lines,
            cached,
        })
    }

    async fn recompute(&self, sales_id: Uuid, cache_key: &str) -> Result<Vec<StockLine>, AppError> {
        let fillups = self.fillups.find_by_salesman(sales_id).await?;
        let lines = stock_ledger::aggregate(&fillups);

        if let Err(e) = self.redis.set(cache_key, &lines, self.cache_ttl).await {
            warn!("⚠️ No se pudo cachear el snapshot de stock: {}", e);
        }

        Ok(lines)
    }
}
