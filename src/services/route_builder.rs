//! Constructor de rutas de visita
//!
//! Este módulo mantiene la secuencia ordenada y sin duplicados de clientes
//! seleccionados para un tour, y el filtrado de clientes candidatos
//! (búsqueda libre + restricción por región).

use std::collections::HashSet;

use uuid::Uuid;

use crate::models::customer::Customer;

/// Restricción de región efectiva para el pool de candidatos
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionConstraint {
    /// El vendedor tiene regiones asignadas: el pool se restringe a ellas
    /// y el filtro manual se ignora
    Assigned(HashSet<Uuid>),
    /// Sin vendedor (o sin regiones asignadas): aplica el filtro manual
    Manual(Uuid),
    /// Sin restricción
    Unrestricted,
}

/// Resolver la restricción de región: las regiones asignadas del vendedor
/// seleccionado tienen prioridad sobre el filtro manual.
pub fn resolve_region_constraint(
    salesman_regions: &[Uuid],
    manual_filter: Option<Uuid>,
) -> RegionConstraint {
    if !salesman_regions.is_empty() {
        return RegionConstraint::Assigned(salesman_regions.iter().copied().collect());
    }
    match manual_filter {
        Some(region_id) => RegionConstraint::Manual(region_id),
        None => RegionConstraint::Unrestricted,
    }
}

impl RegionConstraint {
    pub fn allows(&self, region_id: Option<Uuid>) -> bool {
        match self {
            RegionConstraint::Unrestricted => true,
            RegionConstraint::Manual(wanted) => region_id == Some(*wanted),
            RegionConstraint::Assigned(set) => {
                region_id.map(|r| set.contains(&r)).unwrap_or(false)
            }
        }
    }
}

/// ¿El cliente matchea la búsqueda libre? Case-insensitive sobre
/// nombre, dirección y teléfono. Texto vacío matchea todo.
pub fn matches_search(customer: &Customer, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    customer.name.to_lowercase().contains(&needle)
        || customer.address.to_lowercase().contains(&needle)
        || customer.phone.to_lowercase().contains(&needle)
}

/// Secuencia ordenada y sin duplicados de paradas de la ruta,
/// más el estado de filtrado de candidatos.
///
/// Invariante: la secuencia nunca contiene un id duplicado; el orden de la
/// secuencia ES el orden de visita previsto.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteBuilder {
    stops: Vec<Uuid>,
    search: String,
    region_filter: Option<Uuid>,
}

impl RouteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construir una ruta a partir de una lista cruda, descartando
    /// duplicados y preservando el orden de primera aparición.
    pub fn from_ids(ids: &[Uuid]) -> Self {
        let mut builder = Self::new();
        let mut seen = HashSet::new();
        for id in ids {
            if seen.insert(*id) {
                builder.stops.push(*id);
            }
        }
        builder
    }

    pub fn stops(&self) -> &[Uuid] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn contains(&self, customer_id: Uuid) -> bool {
        self.stops.contains(&customer_id)
    }

    /// Si el cliente está en la ruta lo quita; si no está, lo agrega al
    /// final. Dos toggles seguidos restauran la membresía original
    /// (no necesariamente la posición).
    pub fn toggle(&mut self, customer_id: Uuid) {
        if let Some(pos) = self.stops.iter().position(|id| *id == customer_id) {
            self.stops.remove(pos);
        } else {
            self.stops.push(customer_id);
        }
    }

    /// Intercambiar con la parada anterior; no-op en el borde
    pub fn move_up(&mut self, index: usize) {
        if index > 0 && index < self.stops.len() {
            self.stops.swap(index, index - 1);
        }
    }

    /// Intercambiar con la parada siguiente; no-op en el borde
    pub fn move_down(&mut self, index: usize) {
        if index + 1 < self.stops.len() {
            self.stops.swap(index, index + 1);
        }
    }

    /// Reemplazar la secuencia con la lista filtrada actual, en su orden
    pub fn select_all(&mut self, candidate_ids: &[Uuid]) {
        let mut seen = HashSet::new();
        self.stops = candidate_ids
            .iter()
            .filter(|id| seen.insert(**id))
            .copied()
            .collect();
    }

    pub fn clear(&mut self) {
        self.stops.clear();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Fijar el filtro manual de región (se ignora si el vendedor
    /// seleccionado tiene regiones asignadas)
    pub fn set_region_filter(&mut self, region_id: Option<Uuid>) {
        self.region_filter = region_id;
    }

    /// Pool de candidatos visible con los filtros actuales, en orden
    pub fn filter_candidates<'a>(
        &self,
        customers: &'a [Customer],
        salesman_regions: &[Uuid],
    ) -> Vec<&'a Customer> {
        let constraint = resolve_region_constraint(salesman_regions, self.region_filter);
        customers
            .iter()
            .filter(|c| matches_search(c, &self.search))
            .filter(|c| constraint.allows(c.region_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn customer(name: &str, address: &str, phone: &str, region_id: Option<Uuid>) -> Customer {
        Customer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            address: address.to_string(),
            phone: phone.to_string(),
            region_id,
            industry: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_toggle_appends_then_removes() {
        let mut builder = RouteBuilder::new();
        let id = Uuid::new_v4();

        builder.toggle(id);
        assert_eq!(builder.stops(), &[id]);

        builder.toggle(id);
        assert!(builder.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        // toggle(toggle(S, id), id) conserva la membresía de S
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let mut builder = RouteBuilder::from_ids(&[a, b, c]);

        builder.toggle(b);
        builder.toggle(b);

        assert!(builder.contains(a));
        assert!(builder.contains(b));
        assert!(builder.contains(c));
        assert_eq!(builder.len(), 3);
        // La posición no está garantizada: b reaparece al final
        assert_eq!(builder.stops(), &[a, c, b]);
    }

    #[test]
    fn test_never_contains_duplicates() {
        // Secuencia construida con toggles de [10, 20, 10, 30]:
        // el segundo toggle de `a` lo quita y no se re-agrega solo
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let mut builder = RouteBuilder::new();
        for id in [a, b, a, c] {
            builder.toggle(id);
        }

        assert_eq!(builder.stops(), &[b, c]);
        let unique: HashSet<_> = builder.stops().iter().collect();
        assert_eq!(unique.len(), builder.len());
    }

    #[test]
    fn test_from_ids_dedupes_preserving_first_occurrence() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let builder = RouteBuilder::from_ids(&[a, b, a, a, b]);
        assert_eq!(builder.stops(), &[a, b]);
    }

    #[test]
    fn test_move_up_and_down() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let mut builder = RouteBuilder::from_ids(&[a, b, c]);

        builder.move_up(1);
        assert_eq!(builder.stops(), &[b, a, c]);

        builder.move_down(1);
        assert_eq!(builder.stops(), &[b, c, a]);
    }

    #[test]
    fn test_move_is_noop_at_boundaries() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut builder = RouteBuilder::from_ids(&[a, b]);

        builder.move_up(0);
        assert_eq!(builder.stops(), &[a, b]);

        builder.move_down(1);
        assert_eq!(builder.stops(), &[a, b]);

        builder.move_down(7);
        assert_eq!(builder.stops(), &[a, b]);
    }

    #[test]
    fn test_select_all_then_clear_yields_empty() {
        let ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let mut builder = RouteBuilder::new();

        builder.select_all(&ids);
        assert_eq!(builder.stops(), &ids[..]);

        builder.clear();
        assert!(builder.is_empty());
    }

    #[test]
    fn test_search_matches_name_address_phone() {
        let c = customer("Panadería Sol", "Calle Mayor 12", "+34 600 123", None);

        assert!(matches_search(&c, "panadería"));
        assert!(matches_search(&c, "MAYOR"));
        assert!(matches_search(&c, "600"));
        assert!(matches_search(&c, ""));
        assert!(!matches_search(&c, "ferretería"));
    }

    #[test]
    fn test_assigned_regions_override_manual_filter() {
        let north = Uuid::new_v4();
        let south = Uuid::new_v4();
        let in_north = customer("A", "x", "1", Some(north));
        let in_south = customer("B", "y", "2", Some(south));
        let customers = vec![in_north.clone(), in_south.clone()];

        let mut builder = RouteBuilder::new();
        // Filtro manual apunta al sur, pero el vendedor está asignado al norte
        builder.set_region_filter(Some(south));
        let filtered = builder.filter_candidates(&customers, &[north]);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, in_north.id);
    }

    #[test]
    fn test_manual_filter_applies_without_salesman_regions() {
        let north = Uuid::new_v4();
        let south = Uuid::new_v4();
        let customers = vec![
            customer("A", "x", "1", Some(north)),
            customer("B", "y", "2", Some(south)),
            customer("C", "z", "3", None),
        ];

        let mut builder = RouteBuilder::new();
        builder.set_region_filter(Some(south));
        let filtered = builder.filter_candidates(&customers, &[]);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "B");
    }

    #[test]
    fn test_search_filter_applies_to_candidate_pool() {
        let customers = vec![
            customer("Panadería Sol", "Calle Mayor 12", "+34 600 123", None),
            customer("Ferretería Ruiz", "Av. Norte 3", "+34 611 456", None),
        ];

        let mut builder = RouteBuilder::new();
        builder.set_search("ferretería");
        assert_eq!(builder.search(), "ferretería");

        let filtered = builder.filter_candidates(&customers, &[]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Ferretería Ruiz");
    }

    #[test]
    fn test_unrestricted_pool_without_filters() {
        let customers = vec![
            customer("A", "x", "1", Some(Uuid::new_v4())),
            customer("B", "y", "2", None),
        ];
        let builder = RouteBuilder::new();
        assert_eq!(builder.filter_candidates(&customers, &[]).len(), 2);
    }
}
