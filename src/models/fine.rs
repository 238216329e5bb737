//! Modelo de FineEvent
//!
//! Las multas participan del reporte de gastos solo cuando están pagadas,
//! fechadas por su fecha de pago. No se borran en cascada con el vehículo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado de pago de la multa - mapea al ENUM fine_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "fine_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FineStatus {
    Pending,
    Paid,
    Recurring,
    Cancelled,
}

/// Evento de multa
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FineEvent {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_plate: String,
    pub infraction_date: DateTime<Utc>,
    pub description: String,
    pub amount: f64,
    pub due_date: Option<DateTime<Utc>>,
    pub status: FineStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Resolver la fecha de pago según el estado: `paid` sin fecha toma el
/// instante actual; cualquier estado distinto de `paid` fuerza NULL.
pub fn resolve_paid_at(
    status: FineStatus,
    paid_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match status {
        FineStatus::Paid => Some(paid_at.unwrap_or(now)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_without_date_takes_now() {
        let now = Utc::now();
        assert_eq!(resolve_paid_at(FineStatus::Paid, None, now), Some(now));
    }

    #[test]
    fn test_paid_with_explicit_date_keeps_it() {
        let now = Utc::now();
        let explicit = now - chrono::Duration::days(3);
        assert_eq!(
            resolve_paid_at(FineStatus::Paid, Some(explicit), now),
            Some(explicit)
        );
    }

    #[test]
    fn test_unpaid_statuses_force_null() {
        let now = Utc::now();
        for status in [FineStatus::Pending, FineStatus::Recurring, FineStatus::Cancelled] {
            assert_eq!(resolve_paid_at(status, Some(now), now), None);
        }
    }
}
