use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance::{MaintenanceEvent, MaintenanceKind};

/// Request para registrar un mantenimiento.
///
/// Si el tipo es cambio de aceite, los campos `next_oil_change_*` se copian
/// tal cual al snapshot del vehículo (no se autocalculan por intervalo).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub vehicle_id: Uuid,
    pub kind: MaintenanceKind,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    pub performed_at: DateTime<Utc>,
    pub cost: Option<f64>,
    pub odometer: Option<i64>,
    pub performed_by: Option<String>,
    pub next_oil_change_odometer: Option<i64>,
    pub next_oil_change_date: Option<DateTime<Utc>>,
}

/// Filtros de listado de mantenimientos
#[derive(Debug, Deserialize)]
pub struct MaintenanceFilters {
    pub vehicle_id: Option<Uuid>,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Response de mantenimiento
#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_plate: String,
    pub kind: MaintenanceKind,
    pub description: Option<String>,
    pub performed_at: DateTime<Utc>,
    pub cost: Option<f64>,
    pub odometer: Option<i64>,
    pub performed_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<MaintenanceEvent> for MaintenanceResponse {
    fn from(event: MaintenanceEvent) -> Self {
        Self {
            id: event.id,
            vehicle_id: event.vehicle_id,
            vehicle_plate: event.vehicle_plate,
            kind: event.kind,
            description: event.description,
            performed_at: event.performed_at,
            cost: event.cost,
            odometer: event.odometer,
            performed_by: event.performed_by,
            created_at: event.created_at,
        }
    }
}
