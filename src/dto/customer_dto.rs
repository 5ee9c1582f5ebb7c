use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::customer::Customer;

// Query de búsqueda de clientes candidatos
#[derive(Debug, Deserialize)]
pub struct CustomerSearchQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// Búsqueda libre sobre nombre/dirección/teléfono
    pub q: Option<String>,
    /// Filtro manual de región (ignorado si salesman_id trae regiones asignadas)
    pub region_id: Option<Uuid>,
    /// Vendedor seleccionado: sus regiones asignadas restringen el pool
    pub salesman_id: Option<Uuid>,
}

// Response paginada de clientes
#[derive(Debug, Serialize)]
pub struct CustomerPageResponse {
    pub customers: Vec<Customer>,
    pub page: i64,
    pub has_more: bool,
}
