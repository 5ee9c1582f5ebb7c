//! Modelo de Salesman y evaluación de elegibilidad
//!
//! Este módulo contiene el struct Salesman, su status como ENUM de
//! PostgreSQL, y el predicado puro que decide si un vendedor puede
//! recibir un tour nuevo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

use super::journey::JourneySummary;

/// Status del vendedor - mapea al ENUM salesman_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "salesman_status", rename_all = "lowercase")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesmanStatus {
    Active,
    Inactive,
    Blocked,
}

impl SalesmanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalesmanStatus::Active => "ACTIVE",
            SalesmanStatus::Inactive => "INACTIVE",
            SalesmanStatus::Blocked => "BLOCKED",
        }
    }
}

/// Vendedor - mapea exactamente a la tabla salesmen
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Salesman {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub status: SalesmanStatus,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

/// Razón por la que un vendedor NO es seleccionable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IneligibilityReason {
    /// El vendedor se marcó como no disponible
    Unavailable,
    /// El status no es ACTIVE
    Status(SalesmanStatus),
    /// Tiene un journey abierto (empezado y sin terminar)
    InJourney,
}

impl IneligibilityReason {
    pub fn code(&self) -> &'static str {
        match self {
            IneligibilityReason::Unavailable => "UNAVAILABLE",
            IneligibilityReason::Status(SalesmanStatus::Inactive) => "STATUS_INACTIVE",
            IneligibilityReason::Status(SalesmanStatus::Blocked) => "STATUS_BLOCKED",
            IneligibilityReason::Status(SalesmanStatus::Active) => "STATUS_ACTIVE",
            IneligibilityReason::InJourney => "IN_JOURNEY",
        }
    }
}

/// Resultado de la evaluación de elegibilidad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eligibility {
    pub selectable: bool,
    pub reason: Option<IneligibilityReason>,
}

impl Eligibility {
    fn selectable() -> Self {
        Self { selectable: true, reason: None }
    }

    fn blocked(reason: IneligibilityReason) -> Self {
        Self { selectable: false, reason: Some(reason) }
    }
}

/// Decidir si un vendedor puede recibir un tour nuevo.
///
/// Función pura y total; el primer criterio que aplica gana:
/// 1. no disponible, 2. status distinto de ACTIVE, 3. journey abierto.
///
/// Precondición: `journeys` viene ordenado más-reciente-primero (el
/// repositorio lo garantiza con ORDER BY created_at DESC); solo el
/// journey más reciente determina la regla 3.
pub fn evaluate_eligibility(salesman: &Salesman, journeys: &[JourneySummary]) -> Eligibility {
    if !salesman.available {
        return Eligibility::blocked(IneligibilityReason::Unavailable);
    }

    if salesman.status != SalesmanStatus::Active {
        return Eligibility::blocked(IneligibilityReason::Status(salesman.status));
    }

    if journeys.first().map(|j| j.is_open()).unwrap_or(false) {
        return Eligibility::blocked(IneligibilityReason::InJourney);
    }

    Eligibility::selectable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn salesman(available: bool, status: SalesmanStatus) -> Salesman {
        Salesman {
            id: Uuid::new_v4(),
            name: "Carlos Mendoza".to_string(),
            phone: Some("+34 600 111 222".to_string()),
            status,
            available,
            created_at: Utc::now(),
        }
    }

    fn journey(started: Option<i64>, ended: Option<i64>) -> JourneySummary {
        JourneySummary {
            id: Uuid::new_v4(),
            started_at: started.map(|s| Utc.timestamp_opt(s, 0).unwrap()),
            ended_at: ended.map(|s| Utc.timestamp_opt(s, 0).unwrap()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_unavailable_wins_over_everything() {
        // No disponible bloquea aunque el resto de campos sea favorable
        let result = evaluate_eligibility(&salesman(false, SalesmanStatus::Active), &[]);
        assert!(!result.selectable);
        assert_eq!(result.reason, Some(IneligibilityReason::Unavailable));
    }

    #[test]
    fn test_unavailable_checked_before_status() {
        let result = evaluate_eligibility(&salesman(false, SalesmanStatus::Blocked), &[]);
        assert_eq!(result.reason, Some(IneligibilityReason::Unavailable));
    }

    #[test]
    fn test_inactive_status_blocks() {
        let result = evaluate_eligibility(&salesman(true, SalesmanStatus::Inactive), &[]);
        assert!(!result.selectable);
        assert_eq!(
            result.reason,
            Some(IneligibilityReason::Status(SalesmanStatus::Inactive))
        );
        assert_eq!(result.reason.unwrap().code(), "STATUS_INACTIVE");
    }

    #[test]
    fn test_open_journey_blocks() {
        let journeys = vec![journey(Some(100), None)];
        let result = evaluate_eligibility(&salesman(true, SalesmanStatus::Active), &journeys);
        assert!(!result.selectable);
        assert_eq!(result.reason, Some(IneligibilityReason::InJourney));
    }

    #[test]
    fn test_only_most_recent_journey_counts() {
        // Journey más reciente terminado, uno viejo abierto no bloquea
        let journeys = vec![journey(Some(200), Some(300)), journey(Some(100), None)];
        let result = evaluate_eligibility(&salesman(true, SalesmanStatus::Active), &journeys);
        assert!(result.selectable);
    }

    #[test]
    fn test_planned_journey_does_not_block() {
        // Un journey planificado (sin empezar) no cuenta como abierto
        let journeys = vec![journey(None, None)];
        let result = evaluate_eligibility(&salesman(true, SalesmanStatus::Active), &journeys);
        assert!(result.selectable);
        assert_eq!(result.reason, None);
    }

    #[test]
    fn test_selectable_with_no_journeys() {
        let result = evaluate_eligibility(&salesman(true, SalesmanStatus::Active), &[]);
        assert!(result.selectable);
        assert_eq!(result.reason, None);
    }
}
