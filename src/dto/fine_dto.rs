use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::fine::{FineEvent, FineStatus};

/// Request para registrar una multa
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFineRequest {
    pub vehicle_id: Uuid,
    pub infraction_date: DateTime<Utc>,
    #[validate(length(min = 1, max = 500))]
    pub description: String,
    pub amount: f64,
    pub due_date: Option<DateTime<Utc>>,
    /// Por defecto, `pending`
    pub status: Option<FineStatus>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Request para actualizar una multa (típicamente el estado de pago)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFineRequest {
    #[validate(length(min = 1, max = 500))]
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<FineStatus>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Filtros de listado de multas
#[derive(Debug, Deserialize)]
pub struct FineFilters {
    pub vehicle_id: Option<Uuid>,
    pub status: Option<FineStatus>,
}

/// Response de multa
#[derive(Debug, Serialize)]
pub struct FineResponse {
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

impl From<FineEvent> for FineResponse {
    fn from(event: FineEvent) -> Self {
        Self {
            id: event.id,
            vehicle_id: event.vehicle_id,
            vehicle_plate: event.vehicle_plate,
            infraction_date: event.infraction_date,
            description: event.description,
            amount: event.amount,
            due_date: event.due_date,
            status: event.status,
            paid_at: event.paid_at,
            created_at: event.created_at,
        }
    }
}
