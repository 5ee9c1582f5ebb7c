use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::journey::JourneySummary;
use crate::models::region::Region;
use crate::models::salesman::Salesman;
use crate::utils::errors::AppError;

#[derive(FromRow)]
struct SalesmanRegionRow {
    salesman_id: Uuid,
    id: Uuid,
    region: String,
    city: String,
    country: String,
}

#[derive(FromRow)]
struct SalesmanJourneyRow {
    salesman_id: Uuid,
    id: Uuid,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

// Las rows llegan ya ordenadas por la query; el agrupado preserva ese orden
fn group_regions(rows: Vec<SalesmanRegionRow>) -> HashMap<Uuid, Vec<Region>> {
    let mut by_salesman: HashMap<Uuid, Vec<Region>> = HashMap::new();
    for row in rows {
        by_salesman.entry(row.salesman_id).or_default().push(Region {
            id: row.id,
            region: row.region,
            city: row.city,
            country: row.country,
        });
    }
    by_salesman
}

fn group_journeys(rows: Vec<SalesmanJourneyRow>) -> HashMap<Uuid, Vec<JourneySummary>> {
    let mut by_salesman: HashMap<Uuid, Vec<JourneySummary>> = HashMap::new();
    for row in rows {
        by_salesman
            .entry(row.salesman_id)
            .or_default()
            .push(JourneySummary {
                id: row.id,
                started_at: row.started_at,
                ended_at: row.ended_at,
                created_at: row.created_at,
            });
    }
    by_salesman
}

pub struct SalesmanRepository {
    pool: PgPool,
}

impl SalesmanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Salesman>, AppError> {
        let salesmen = sqlx::query_as::<_, Salesman>(
            "SELECT * FROM salesmen ORDER BY name"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(salesmen)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Salesman>, AppError> {
        let salesman = sqlx::query_as::<_, Salesman>("SELECT * FROM salesmen WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(salesman)
    }

    /// Regiones asignadas al vendedor (restringen el pool de candidatos)
    pub async fn assigned_regions(&self, salesman_id: Uuid) -> Result<Vec<Region>, AppError> {
        let regions = sqlx::query_as::<_, Region>(
            r#"
            SELECT r.*
            FROM regions r
            JOIN salesman_regions sr ON sr.region_id = r.id
            WHERE sr.salesman_id = $1
            ORDER BY r.region
            "#,
        )
        .bind(salesman_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(regions)
    }

    /// Regiones asignadas por vendedor, en una sola query
    pub async fn assigned_regions_for(
        &self,
        salesman_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Region>>, AppError> {
        if salesman_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, SalesmanRegionRow>(
            r#"
            SELECT sr.salesman_id, r.id, r.region, r.city, r.country
            FROM regions r
            JOIN salesman_regions sr ON sr.region_id = r.id
            WHERE sr.salesman_id = ANY($1)
            ORDER BY r.region
            "#,
        )
        .bind(salesman_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(group_regions(rows))
    }

    /// Journeys recientes por vendedor, más-reciente-primero, en una sola
    /// query. Ese orden es precondición de la evaluación de elegibilidad.
    pub async fn recent_journeys_for(
        &self,
        salesman_ids: &[Uuid],
        limit: i64,
    ) -> Result<HashMap<Uuid, Vec<JourneySummary>>, AppError> {
        if salesman_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, SalesmanJourneyRow>(
            r#"
            SELECT salesman_id, id, started_at, ended_at, created_at
            FROM (
                SELECT salesman_id, id, started_at, ended_at, created_at,
                       ROW_NUMBER() OVER (
                           PARTITION BY salesman_id
                           ORDER BY created_at DESC
                       ) AS rn
                FROM journeys
                WHERE salesman_id = ANY($1)
            ) ranked
            WHERE rn <= $2
            ORDER BY salesman_id, created_at DESC
            "#,
        )
        .bind(salesman_ids)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(group_journeys(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn journey_row(salesman_id: Uuid, secs: i64) -> SalesmanJourneyRow {
        SalesmanJourneyRow {
            salesman_id,
            id: Uuid::new_v4(),
            started_at: None,
            ended_at: None,
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_group_journeys_separa_por_vendedor_preservando_orden() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        // Orden de llegada: más-reciente-primero dentro de cada vendedor
        let rows = vec![
            journey_row(a, 300),
            journey_row(a, 200),
            journey_row(b, 500),
        ];

        let grouped = group_journeys(rows);

        let de_a = &grouped[&a];
        assert_eq!(de_a.len(), 2);
        assert!(de_a[0].created_at > de_a[1].created_at);
        assert_eq!(grouped[&b].len(), 1);
    }

    #[test]
    fn test_group_regions_vendedor_sin_filas_queda_fuera_del_mapa() {
        let a = Uuid::new_v4();
        let rows = vec![SalesmanRegionRow {
            salesman_id: a,
            id: Uuid::new_v4(),
            region: "Norte".to_string(),
            city: "Rosario".to_string(),
            country: "AR".to_string(),
        }];

        let grouped = group_regions(rows);

        assert_eq!(grouped[&a].len(), 1);
        // El caller usa unwrap_or_default para los vendedores ausentes
        assert!(grouped.get(&Uuid::new_v4()).is_none());
    }
}
