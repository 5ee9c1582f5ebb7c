use sqlx::PgPool;

use crate::dto::salesman_dto::SalesmanResponse;
use crate::models::salesman::evaluate_eligibility;
use crate::repositories::salesman_repository::SalesmanRepository;
use crate::utils::errors::AppError;

pub struct SalesmanController {
    repository: SalesmanRepository,
    recent_journeys_limit: i64,
}

impl SalesmanController {
    pub fn new(pool: PgPool, recent_journeys_limit: i64) -> Self {
        Self {
            repository: SalesmanRepository::new(pool),
            recent_journeys_limit,
        }
    }

    /// Listar vendedores con regiones, journeys recientes y elegibilidad.
    ///
    /// Los journeys vienen más-reciente-primero del repositorio; la
    /// evaluación de elegibilidad depende de ese orden.
    pub async fn list(&self) -> Result<Vec<SalesmanResponse>, AppError> {
        let salesmen = self.repository.find_all().await?;
        let ids: Vec<_> = salesmen.iter().map(|s| s.id).collect();

        // Regiones y journeys en dos queries, no 2N
        let mut regions_by_salesman = self.repository.assigned_regions_for(&ids).await?;
        let mut journeys_by_salesman = self
            .repository
            .recent_journeys_for(&ids, self.recent_journeys_limit)
            .await?;

        let mut response = Vec::with_capacity(salesmen.len());
        for salesman in salesmen {
            let regions = regions_by_salesman.remove(&salesman.id).unwrap_or_default();
            let journeys = journeys_by_salesman
                .remove(&salesman.id)
                .unwrap_or_default();
            let eligibility = evaluate_eligibility(&salesman, &journeys);

            response.push(SalesmanResponse::build(
                salesman,
                regions,
                &journeys,
                eligibility,
            ));
        }

        Ok(response)
    }
}
