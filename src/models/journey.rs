//! Modelo de Journey (tour) y Visit
//!
//! Este módulo contiene los structs Journey y Visit que mapean exactamente
//! al schema PostgreSQL, y la derivación pura del estado de ciclo de vida
//! de un journey a partir de sus timestamps.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de ciclo de vida de un journey, derivado de sus timestamps
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JourneyState {
    NotStarted,
    InProgress,
    Completed,
}

impl JourneyState {
    /// Derivar el estado a partir de los timestamps.
    ///
    /// Función pura y total: un journey sin start es NOT_STARTED, con start
    /// y sin end es IN_PROGRESS (journey "abierto"), y con end es COMPLETED.
    pub fn derive(started_at: Option<DateTime<Utc>>, ended_at: Option<DateTime<Utc>>) -> Self {
        match (started_at, ended_at) {
            (None, None) => JourneyState::NotStarted,
            (Some(_), None) => JourneyState::InProgress,
            (_, Some(_)) => JourneyState::Completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyState::NotStarted => "NOT_STARTED",
            JourneyState::InProgress => "IN_PROGRESS",
            JourneyState::Completed => "COMPLETED",
        }
    }
}

/// Duración del journey cuando ambos timestamps están presentes
pub fn journey_duration(
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
) -> Option<Duration> {
    match (started_at, ended_at) {
        (Some(start), Some(end)) => Some(end - start),
        _ => None,
    }
}

/// Journey principal - mapea exactamente a la tabla journeys
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Journey {
    pub id: Uuid,
    pub salesman_id: Uuid,
    pub region_id: Option<Uuid>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Journey {
    pub fn state(&self) -> JourneyState {
        JourneyState::derive(self.started_at, self.ended_at)
    }

    /// Un journey está "abierto" cuando el vendedor lo empezó y no lo terminó
    pub fn is_open(&self) -> bool {
        self.state() == JourneyState::InProgress
    }
}

/// Visita a un cliente dentro de un journey.
/// `position` es el orden de visita entregado en el batch de creación.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Visit {
    pub id: Uuid,
    pub journey_id: Uuid,
    pub customer_id: Uuid,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// Resumen de journey embebido en respuestas de vendedor.
/// Precondición de consumo: las listas vienen ordenadas más-reciente-primero
/// (garantizado por el repositorio con ORDER BY created_at DESC).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JourneySummary {
    pub id: Uuid,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl JourneySummary {
    pub fn state(&self) -> JourneyState {
        JourneyState::derive(self.started_at, self.ended_at)
    }

    pub fn is_open(&self) -> bool {
        self.state() == JourneyState::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_state_not_started() {
        assert_eq!(JourneyState::derive(None, None), JourneyState::NotStarted);
    }

    #[test]
    fn test_state_in_progress() {
        assert_eq!(
            JourneyState::derive(Some(ts(100)), None),
            JourneyState::InProgress
        );
    }

    #[test]
    fn test_state_completed() {
        assert_eq!(
            JourneyState::derive(Some(ts(100)), Some(ts(200))),
            JourneyState::Completed
        );
    }

    #[test]
    fn test_duration_both_present() {
        let duration = journey_duration(Some(ts(100)), Some(ts(460))).unwrap();
        assert_eq!(duration.num_seconds(), 360);
    }

    #[test]
    fn test_duration_undefined_while_open() {
        assert!(journey_duration(Some(ts(100)), None).is_none());
        assert!(journey_duration(None, None).is_none());
    }
}
