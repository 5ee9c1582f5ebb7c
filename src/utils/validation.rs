//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::utils::errors::AppError;

/// Validar y convertir string a fecha (YYYY-MM-DD)
pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!(
            "'{}' no es una fecha válida para {} (formato esperado: YYYY-MM-DD)",
            value, field
        ))
    })
}

/// Convertir una fecha a la medianoche UTC de ese día
pub fn day_start(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default())
}

/// Convertir una fecha al inicio del día siguiente (límite exclusivo de rango)
pub fn day_end_exclusive(date: NaiveDate) -> DateTime<Utc> {
    day_start(date) + chrono::Duration::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("2025-03-14", "start_date").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("14/03/2025", "start_date").is_err());
        assert!(parse_date("", "start_date").is_err());
    }

    #[test]
    fn test_day_range_covers_full_day() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let start = day_start(date);
        let end = day_end_exclusive(date);
        assert_eq!((end - start).num_hours(), 24);
    }
}
