use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::customer_dto::{CustomerPageResponse, CustomerSearchQuery};
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::salesman_repository::SalesmanRepository;
use crate::services::route_builder::{resolve_region_constraint, RegionConstraint};
use crate::utils::errors::AppError;

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

pub struct CustomerController {
    customers: CustomerRepository,
    salesmen: SalesmanRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            customers: CustomerRepository::new(pool.clone()),
            salesmen: SalesmanRepository::new(pool),
        }
    }

    /// Búsqueda paginada de clientes candidatos para la ruta.
    ///
    /// Si viene un vendedor seleccionado con regiones asignadas, el pool se
    /// restringe a esas regiones y el filtro manual de región se ignora.
    pub async fn search(
        &self,
        query: CustomerSearchQuery,
    ) -> Result<CustomerPageResponse, AppError> {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let salesman_regions: Vec<Uuid> = match query.salesman_id {
            Some(salesman_id) => {
                // Verificar que el vendedor existe antes de usar sus regiones
                self.salesmen
                    .find_by_id(salesman_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Vendedor no encontrado".to_string()))?;
                self.salesmen
                    .assigned_regions(salesman_id)
                    .await?
                    .into_iter()
                    .map(|r| r.id)
                    .collect()
            }
            None => Vec::new(),
        };

        let region_ids = match resolve_region_constraint(&salesman_regions, query.region_id) {
            RegionConstraint::Assigned(set) => Some(set.into_iter().collect::<Vec<Uuid>>()),
            RegionConstraint::Manual(region_id) => Some(vec![region_id]),
            RegionConstraint::Unrestricted => None,
        };

        let (customers, has_more) = self
            .customers
            .search(query.q.as_deref(), region_ids, page, limit)
            .await?;

        Ok(CustomerPageResponse {
            customers,
            page,
            has_more,
        })
    }
}
