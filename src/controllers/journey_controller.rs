use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::journey_dto::{
    BulkCreateVisitsRequest, BulkCreateVisitsResponse, JourneyListQuery, JourneyPageResponse,
    JourneyResponse,
};
use crate::repositories::journey_repository::JourneyRepository;
use crate::repositories::salesman_repository::SalesmanRepository;
use crate::services::RouteBuilder;
use crate::utils::errors::AppError;
use crate::utils::validation::{day_end_exclusive, day_start, parse_date};

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

pub struct JourneyController {
    journeys: JourneyRepository,
    salesmen: SalesmanRepository,
}

impl JourneyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            journeys: JourneyRepository::new(pool.clone()),
            salesmen: SalesmanRepository::new(pool),
        }
    }

    /// Crear un tour a partir de la ruta ordenada de clientes.
    ///
    /// La elegibilidad del vendedor es precondición del caller; el store
    /// igualmente rechaza si hay un journey abierto. Los ids duplicados
    /// del batch se descartan acá (invariante de la ruta) y el store salta
    /// los clientes con visita pendiente equivalente.
    pub async fn bulk_create(
        &self,
        request: BulkCreateVisitsRequest,
    ) -> Result<BulkCreateVisitsResponse, AppError> {
        if request.customer_ids.is_empty() {
            return Err(AppError::Validation(
                "La ruta debe tener al menos un cliente".to_string(),
            ));
        }

        self.salesmen
            .find_by_id(request.salesman_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vendedor no encontrado".to_string()))?;

        // Re-aplicar el invariante de la ruta en el borde del sistema
        let route = RouteBuilder::from_ids(&request.customer_ids);

        let outcome = self
            .journeys
            .bulk_create(request.salesman_id, route.stops())
            .await?;

        info!(
            "🗺️ Tour creado para vendedor {}: {} visitas creadas, {} saltadas",
            request.salesman_id, outcome.created, outcome.skipped
        );

        Ok(BulkCreateVisitsResponse {
            count: outcome.created,
            skipped: outcome.skipped,
        })
    }

    /// Listado paginado de journeys con estado derivado
    pub async fn list(&self, query: JourneyListQuery) -> Result<JourneyPageResponse, AppError> {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let created_from = query
            .start_date
            .as_deref()
            .map(|d| parse_date(d, "start_date").map(day_start))
            .transpose()?;
        let created_until = query
            .end_date
            .as_deref()
            .map(|d| parse_date(d, "end_date").map(day_end_exclusive))
            .transpose()?;

        let (journeys, total) = self
            .journeys
            .find_paginated(query.salesman_id, created_from, created_until, page, limit)
            .await?;

        let journey_ids: Vec<Uuid> = journeys.iter().map(|j| j.id).collect();
        let visit_counts = self.journeys.visit_counts(&journey_ids).await?;

        let journeys: Vec<JourneyResponse> = journeys
            .into_iter()
            .map(|j| {
                let count = visit_counts.get(&j.id).copied().unwrap_or(0);
                JourneyResponse::build(j, count)
            })
            .collect();

        let total_pages = if total == 0 { 0 } else { (total + limit - 1) / limit };

        Ok(JourneyPageResponse {
            journeys,
            total,
            total_pages,
            has_more: page < total_pages,
        })
    }

    /// Journey más reciente del vendedor (target para fillups)
    pub async fn latest(&self, sales_id: Uuid) -> Result<JourneyResponse, AppError> {
        let journey = self
            .journeys
            .latest(sales_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("El vendedor {} no tiene journeys", sales_id))
            })?;

        let visit_counts = self.journeys.visit_counts(&[journey.id]).await?;
        let count = visit_counts.get(&journey.id).copied().unwrap_or(0);

        Ok(JourneyResponse::build(journey, count))
    }
}
