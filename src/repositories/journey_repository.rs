use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::models::journey::Journey;
use crate::utils::errors::AppError;

/// Resultado del batch de creación de visitas
#[derive(Debug, Clone, Copy)]
pub struct BulkCreateOutcome {
    pub created: i64,
    pub skipped: i64,
}

/// Plan del batch: qué clientes se crean y cuántos se saltan
#[derive(Debug, Clone)]
pub struct BatchPlan {
    pub fresh: Vec<Uuid>,
    pub skipped: i64,
}

impl BatchPlan {
    /// Un batch donde todos los clientes se saltaron no persiste nada
    pub fn should_persist(&self) -> bool {
        !self.fresh.is_empty()
    }
}

/// Separa el batch en clientes frescos y saltados, preservando el orden.
/// `pending` son los clientes que ya tienen una visita del vendedor en un
/// journey aún no completado.
pub fn plan_batch(customer_ids: &[Uuid], pending: &HashSet<Uuid>) -> BatchPlan {
    let fresh: Vec<Uuid> = customer_ids
        .iter()
        .filter(|id| !pending.contains(id))
        .copied()
        .collect();
    let skipped = (customer_ids.len() - fresh.len()) as i64;

    BatchPlan { fresh, skipped }
}

pub struct JourneyRepository {
    pool: PgPool,
}

impl JourneyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear un journey con su batch de visitas en una sola transacción.
    ///
    /// Comportamiento del store:
    /// - Rechaza con Conflict si el vendedor ya tiene un journey abierto
    ///   (empezado y sin terminar).
    /// - Clave de deduplicación de visitas: se SALTA un cliente si el
    ///   vendedor ya tiene una visita para ese cliente en un journey aún
    ///   no completado (ended_at IS NULL).
    /// - Si todos los clientes se saltan no se persiste ningún journey.
    /// - Las visitas creadas llevan `position` según el orden del batch.
    pub async fn bulk_create(
        &self,
        salesman_id: Uuid,
        customer_ids: &[Uuid],
    ) -> Result<BulkCreateOutcome, AppError> {
        let mut tx = self.pool.begin().await?;

        let has_open_journey: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM journeys
                WHERE salesman_id = $1
                  AND started_at IS NOT NULL
                  AND ended_at IS NULL
            )
            "#,
        )
        .bind(salesman_id)
        .fetch_one(&mut *tx)
        .await?;

        if has_open_journey {
            return Err(AppError::Conflict(
                "El vendedor ya tiene un journey abierto".to_string(),
            ));
        }

        // Clientes con visita pendiente en journeys no completados del vendedor
        let duplicates: Vec<Uuid> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT v.customer_id
            FROM visits v
            JOIN journeys j ON j.id = v.journey_id
            WHERE j.salesman_id = $1
              AND j.ended_at IS NULL
              AND v.customer_id = ANY($2)
            "#,
        )
        .bind(salesman_id)
        .bind(customer_ids)
        .fetch_all(&mut *tx)
        .await?;
        let duplicates: HashSet<Uuid> = duplicates.into_iter().collect();

        let plan = plan_batch(customer_ids, &duplicates);

        if !plan.should_persist() {
            // Nada que crear: no dejar un journey vacío
            tx.rollback().await?;
            return Ok(BulkCreateOutcome {
                created: 0,
                skipped: plan.skipped,
            });
        }

        let journey_id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO journeys (id, salesman_id, region_id, started_at, ended_at, created_at)
            VALUES ($1, $2, NULL, NULL, NULL, $3)
            "#,
        )
        .bind(journey_id)
        .bind(salesman_id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        for (position, customer_id) in plan.fresh.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO visits (id, journey_id, customer_id, position, created_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(journey_id)
            .bind(customer_id)
            .bind(position as i32)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(BulkCreateOutcome {
            created: plan.fresh.len() as i64,
            skipped: plan.skipped,
        })
    }

    /// Listado paginado, más-reciente-primero. Devuelve (journeys, total).
    pub async fn find_paginated(
        &self,
        salesman_id: Option<Uuid>,
        created_from: Option<DateTime<Utc>>,
        created_until: Option<DateTime<Utc>>,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<Journey>, i64), AppError> {
        let offset = (page - 1) * limit;

        let journeys = sqlx::query_as::<_, Journey>(
            r#"
            SELECT *
            FROM journeys
            WHERE ($1::uuid IS NULL OR salesman_id = $1)
              AND ($2::timestamptz IS NULL OR created_at >= $2)
              AND ($3::timestamptz IS NULL OR created_at < $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(salesman_id)
        .bind(created_from)
        .bind(created_until)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM journeys
            WHERE ($1::uuid IS NULL OR salesman_id = $1)
              AND ($2::timestamptz IS NULL OR created_at >= $2)
              AND ($3::timestamptz IS NULL OR created_at < $3)
            "#,
        )
        .bind(salesman_id)
        .bind(created_from)
        .bind(created_until)
        .fetch_one(&self.pool)
        .await?;

        Ok((journeys, total))
    }

    /// Journey más reciente del vendedor (target de un fillup)
    pub async fn latest(&self, salesman_id: Uuid) -> Result<Option<Journey>, AppError> {
        let journey = sqlx::query_as::<_, Journey>(
            r#"
            SELECT * FROM journeys
            WHERE salesman_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(salesman_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(journey)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Journey>, AppError> {
        let journey = sqlx::query_as::<_, Journey>("SELECT * FROM journeys WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(journey)
    }

    /// Cantidad de visitas por journey, en una sola query
    pub async fn visit_counts(
        &self,
        journey_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, i64>, AppError> {
        if journey_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(Uuid, i64)> = sqlx::query_as(
            r#"
            SELECT journey_id, COUNT(*)
            FROM visits
            WHERE journey_id = ANY($1)
            GROUP BY journey_id
            "#,
        )
        .bind(journey_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn test_plan_batch_sin_pendientes_crea_todo() {
        let customers = ids(3);
        let plan = plan_batch(&customers, &HashSet::new());

        assert_eq!(plan.fresh, customers);
        assert_eq!(plan.skipped, 0);
        assert!(plan.should_persist());
    }

    #[test]
    fn test_plan_batch_salta_clientes_pendientes() {
        let customers = ids(4);
        let pending: HashSet<Uuid> = [customers[1], customers[3]].into_iter().collect();

        let plan = plan_batch(&customers, &pending);

        assert_eq!(plan.fresh, vec![customers[0], customers[2]]);
        assert_eq!(plan.skipped, 2);
        assert!(plan.should_persist());
    }

    #[test]
    fn test_plan_batch_preserva_el_orden_del_batch() {
        let customers = ids(5);
        let pending: HashSet<Uuid> = [customers[2]].into_iter().collect();

        let plan = plan_batch(&customers, &pending);

        assert_eq!(
            plan.fresh,
            vec![customers[0], customers[1], customers[3], customers[4]]
        );
    }

    #[test]
    fn test_plan_batch_todos_saltados_no_persiste() {
        let customers = ids(2);
        let pending: HashSet<Uuid> = customers.iter().copied().collect();

        let plan = plan_batch(&customers, &pending);

        assert!(plan.fresh.is_empty());
        assert_eq!(plan.skipped, 2);
        assert!(!plan.should_persist());
    }

    #[test]
    fn test_plan_batch_ignora_pendientes_fuera_del_batch() {
        let customers = ids(2);
        let pending: HashSet<Uuid> = ids(3).into_iter().collect();

        let plan = plan_batch(&customers, &pending);

        assert_eq!(plan.fresh, customers);
        assert_eq!(plan.skipped, 0);
    }
}
