use sqlx::PgPool;
use uuid::Uuid;

use crate::models::customer::Customer;
use crate::utils::errors::AppError;

/// Escapa los metacaracteres de LIKE para que la búsqueda sea literal
fn escape_like(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Búsqueda paginada de clientes candidatos.
    ///
    /// `search` aplica ILIKE sobre nombre/dirección/teléfono;
    /// `region_ids = None` significa sin restricción de región.
    /// Devuelve (clientes, has_more) pidiendo limit+1 filas.
    pub async fn search(
        &self,
        search: Option<&str>,
        region_ids: Option<Vec<Uuid>>,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<Customer>, bool), AppError> {
        let pattern = search
            .map(|q| q.trim())
            .filter(|q| !q.is_empty())
            .map(|q| format!("%{}%", escape_like(q)));
        let offset = (page - 1) * limit;

        let mut customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT *
            FROM customers
            WHERE ($1::text IS NULL OR name ILIKE $1 OR address ILIKE $1 OR phone ILIKE $1)
              AND ($2::uuid[] IS NULL OR region_id = ANY($2))
            ORDER BY name
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(pattern)
        .bind(region_ids)
        .bind(limit + 1)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let has_more = customers.len() as i64 > limit;
        customers.truncate(limit as usize);

        Ok((customers, has_more))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_deja_texto_normal_intacto() {
        assert_eq!(escape_like("Almacén Don Pepe"), "Almacén Don Pepe");
    }

    #[test]
    fn test_escape_like_escapa_metacaracteres() {
        // "100%" busca el literal, no un prefijo
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("kiosco_24"), "kiosco\\_24");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
