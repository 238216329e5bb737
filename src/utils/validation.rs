//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos,
//! normalización de matrículas y rangos de fechas para reportes.

use chrono::{DateTime, Duration, TimeZone, Utc};
use validator::ValidationError;

use crate::utils::errors::AppError;

/// Normalizar matrícula: mayúsculas y solo caracteres alfanuméricos
pub fn normalize_plate(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_uppercase()
}

/// Validar formato de matrícula ya normalizada
pub fn validate_plate(value: &str) -> Result<(), ValidationError> {
    if value.len() < 5 || value.len() > 10 {
        let mut error = ValidationError::new("plate");
        error.add_param("value".into(), &value.to_string());
        error.add_param("length".into(), &"5-10 alphanumeric characters".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor opcional, si está presente, sea positivo
pub fn validate_optional_positive(field: &'static str, value: Option<f64>) -> Result<(), AppError> {
    if let Some(v) = value {
        if v <= 0.0 {
            return Err(crate::utils::errors::validation_error(field, "must be positive"));
        }
    }
    Ok(())
}

/// Rango de fechas para filtros de reportes.
///
/// Sin año no hay filtro (el mes se ignora). Con año solo, el rango cubre
/// el año calendario completo en UTC; con año y mes, ese mes calendario.
pub fn period_range(
    year: Option<i32>,
    month: Option<u32>,
) -> Result<Option<(DateTime<Utc>, DateTime<Utc>)>, AppError> {
    let Some(year) = year else {
        return Ok(None);
    };

    let (start_year, start_month, end_year, end_month) = match month {
        None => (year, 1, year + 1, 1),
        Some(m) => {
            if !(1..=12).contains(&m) {
                return Err(AppError::BadRequest(format!("Mes inválido: {}", m)));
            }
            if m == 12 {
                (year, 12, year + 1, 1)
            } else {
                (year, m, year, m + 1)
            }
        }
    };

    let start = Utc
        .with_ymd_and_hms(start_year, start_month, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| AppError::BadRequest(format!("Año inválido: {}", year)))?;
    let end = Utc
        .with_ymd_and_hms(end_year, end_month, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| AppError::BadRequest(format!("Año inválido: {}", year)))?
        - Duration::milliseconds(1);

    Ok(Some((start, end)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("abc-1234"), "ABC1234");
        assert_eq!(normalize_plate(" ab c1d23 "), "ABC1D23");
        assert_eq!(normalize_plate("ABC1234"), "ABC1234");
    }

    #[test]
    fn test_validate_plate() {
        assert!(validate_plate("ABC1234").is_ok());
        assert!(validate_plate("AB12").is_err());
        assert!(validate_plate("ABCDEFGHIJK").is_err());
    }

    #[test]
    fn test_period_range_whole_year() {
        let (start, end) = period_range(Some(2024), None).unwrap().unwrap();
        assert_eq!(start.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(end.date_naive().to_string(), "2024-12-31");
        assert_eq!(end.hour(), 23);
    }

    #[test]
    fn test_period_range_single_month() {
        let (start, end) = period_range(Some(2024), Some(2)).unwrap().unwrap();
        assert_eq!(start.to_rfc3339(), "2024-02-01T00:00:00+00:00");
        // 2024 es bisiesto
        assert_eq!(end.date_naive().to_string(), "2024-02-29");
    }

    #[test]
    fn test_period_range_december_wraps_year() {
        let (_, end) = period_range(Some(2023), Some(12)).unwrap().unwrap();
        assert_eq!(end.date_naive().to_string(), "2023-12-31");
    }

    #[test]
    fn test_period_range_without_year_is_unbounded() {
        assert!(period_range(None, Some(5)).unwrap().is_none());
    }

    #[test]
    fn test_period_range_invalid_month() {
        assert!(period_range(Some(2024), Some(13)).is_err());
        assert!(period_range(Some(2024), Some(0)).is_err());
    }

    #[test]
    fn test_validate_optional_positive() {
        assert!(validate_optional_positive("cost", None).is_ok());
        assert!(validate_optional_positive("cost", Some(10.5)).is_ok());
        assert!(validate_optional_positive("cost", Some(0.0)).is_err());
        assert!(validate_optional_positive("cost", Some(-3.0)).is_err());
    }
}
