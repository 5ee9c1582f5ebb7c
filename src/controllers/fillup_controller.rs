use std::collections::HashMap;

use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::cache::redis_client::RedisClient;
use crate::cache::CacheOperations;
use crate::dto::fillup_dto::{CreateFillupRequest, FillupListQuery, FillupResponse};
use crate::models::fillup::{FillupItem, Quantity};
use crate::models::product::Product;
use crate::repositories::fillup_repository::FillupRepository;
use crate::repositories::journey_repository::JourneyRepository;
use crate::repositories::product_repository::ProductRepository;
use crate::repositories::salesman_repository::SalesmanRepository;
use crate::utils::errors::AppError;

pub struct FillupController {
    fillups: FillupRepository,
    journeys: JourneyRepository,
    salesmen: SalesmanRepository,
    products: ProductRepository,
    redis: RedisClient,
}

impl FillupController {
    pub fn new(pool: PgPool, redis: RedisClient) -> Self {
        Self {
            fillups: FillupRepository::new(pool.clone()),
            journeys: JourneyRepository::new(pool.clone()),
            salesmen: SalesmanRepository::new(pool.clone()),
            products: ProductRepository::new(pool),
            redis,
        }
    }

    /// Registrar la entrega de stock a un vendedor para un journey.
    ///
    /// Validación local ANTES de cualquier escritura: items no vacíos y
    /// toda cantidad estrictamente positiva; si algo falla no se persiste
    /// nada. Invalida el snapshot de stock cacheado del vendedor.
    pub async fn create(&self, request: CreateFillupRequest) -> Result<FillupResponse, AppError> {
        if request.items.is_empty() {
            return Err(AppError::Validation(
                "El fillup debe tener al menos un item".to_string(),
            ));
        }
        request.validate()?;

        self.salesmen
            .find_by_id(request.sales_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vendedor no encontrado".to_string()))?;

        let journey = self
            .journeys
            .find_by_id(request.journey_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Journey no encontrado".to_string()))?;

        if journey.salesman_id != request.sales_id {
            return Err(AppError::Conflict(
                "El journey no pertenece a este vendedor".to_string(),
            ));
        }

        // Resolver metadata de display de los productos referenciados
        let product_ids: Vec<Uuid> = request.items.iter().map(|i| i.prod_id).collect();
        let products: HashMap<Uuid, Product> = self
            .products
            .find_by_ids(&product_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let mut items = Vec::with_capacity(request.items.len());
        for item in &request.items {
            let product = products.get(&item.prod_id).ok_or_else(|| {
                AppError::Validation(format!("Producto desconocido: {}", item.prod_id))
            })?;

            items.push(FillupItem {
                product_id: item.prod_id,
                quantity: Quantity::Units(item.quantity),
                uom: item.uom.clone(),
                product_name: product.name.clone(),
                category: product.category.clone(),
            });
        }

        let fillup = self
            .fillups
            .create(request.journey_id, request.sales_id, items)
            .await?;

        // Invalidar el snapshot cacheado; si Redis falla, el TTL acota el desfase
        if let Err(e) = self.redis.delete(&self.redis.stock_key(request.sales_id)).await {
            warn!("⚠️ No se pudo invalidar el stock cacheado: {}", e);
        }

        info!(
            "📦 Fillup {} registrado para vendedor {} ({} items)",
            fillup.id,
            request.sales_id,
            fillup.items.len()
        );

        Ok(FillupResponse::from(fillup))
    }

    /// Fillups históricos del vendedor, más-reciente-primero
    pub async fn list(&self, query: FillupListQuery) -> Result<Vec<FillupResponse>, AppError> {
        let fillups = self.fillups.find_by_salesman(query.sales_id).await?;
        Ok(fillups.into_iter().map(FillupResponse::from).collect())
    }
}
