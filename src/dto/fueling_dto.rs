use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::fueling::FuelingEvent;

/// Request para registrar un abastecimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFuelingRequest {
    pub vehicle_id: Uuid,
    pub fueled_at: DateTime<Utc>,
    /// Debe ser >= al odómetro actual del vehículo
    pub odometer: i64,
    pub liters: f64,
    pub price_per_liter: f64,
    /// Por defecto, liters × price_per_liter
    pub total_cost: Option<f64>,
    pub station: Option<String>,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

/// Filtros de listado de abastecimientos
#[derive(Debug, Deserialize)]
pub struct FuelingFilters {
    pub vehicle_id: Option<Uuid>,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Response de abastecimiento
#[derive(Debug, Serialize)]
pub struct FuelingResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_plate: String,
    pub fueled_at: DateTime<Utc>,
    pub odometer: i64,
    pub liters: f64,
    pub price_per_liter: f64,
    pub total_cost: f64,
    pub station: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<FuelingEvent> for FuelingResponse {
    fn from(event: FuelingEvent) -> Self {
        Self {
            id: event.id,
            vehicle_id: event.vehicle_id,
            vehicle_plate: event.vehicle_plate,
            fueled_at: event.fueled_at,
            odometer: event.odometer,
            liters: event.liters,
            price_per_liter: event.price_per_liter,
            total_cost: event.total_cost,
            station: event.station,
            notes: event.notes,
            created_at: event.created_at,
        }
    }
}

/// Response de alta de abastecimiento, con aviso opcional de cambio de
/// aceite por odómetro (no se persiste)
#[derive(Debug, Serialize)]
pub struct FuelingRegisteredResponse {
    #[serde(flatten)]
    pub event: FuelingResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}
