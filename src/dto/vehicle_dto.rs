use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

/// Request para registrar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    // Se normaliza (mayúsculas, solo alfanuméricos) antes de validar
    pub plate: String,

    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub manufacture_year: i32,

    #[validate(range(min = 1900, max = 2100))]
    pub model_year: i32,

    pub color: Option<String>,
    pub chassis: Option<String>,
    pub registration_number: Option<String>,

    pub odometer_current: Option<i64>,

    // Snapshot inicial de mantenimiento (opcional)
    pub next_oil_change_odometer: Option<i64>,
    pub next_oil_change_date: Option<DateTime<Utc>>,
    #[validate(range(min = 1, max = 365))]
    pub checklist_frequency_days: Option<i32>,
    pub next_checklist_date: Option<DateTime<Utc>>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    pub plate: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub manufacture_year: Option<i32>,

    #[validate(range(min = 1900, max = 2100))]
    pub model_year: Option<i32>,

    pub color: Option<String>,
    pub chassis: Option<String>,
    pub registration_number: Option<String>,

    // Sujeto a monotonía: nunca puede bajar
    pub odometer_current: Option<i64>,

    pub next_oil_change_odometer: Option<i64>,
    pub next_oil_change_date: Option<DateTime<Utc>>,
    #[validate(range(min = 1, max = 365))]
    pub checklist_frequency_days: Option<i32>,
    pub next_checklist_date: Option<DateTime<Utc>>,
}

/// Filtros de búsqueda de vehículos
#[derive(Debug, Deserialize)]
pub struct VehicleFilters {
    pub plate: Option<String>,
}

/// Snapshot de mantenimiento anidado en la respuesta
#[derive(Debug, Serialize)]
pub struct MaintenanceInfoResponse {
    pub next_oil_change_odometer: Option<i64>,
    pub next_oil_change_date: Option<DateTime<Utc>>,
    pub checklist_frequency_days: Option<i32>,
    pub next_checklist_date: Option<DateTime<Utc>>,
    pub last_oil_change_odometer: Option<i64>,
    pub last_oil_change_date: Option<DateTime<Utc>>,
    pub last_checklist_date: Option<DateTime<Utc>>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub plate: String,
    pub make: String,
    pub model: String,
    pub manufacture_year: i32,
    pub model_year: i32,
    pub color: Option<String>,
    pub chassis: Option<String>,
    pub registration_number: Option<String>,
    pub odometer_current: i64,
    pub maintenance_info: MaintenanceInfoResponse,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            plate: vehicle.plate,
            make: vehicle.make,
            model: vehicle.model,
            manufacture_year: vehicle.manufacture_year,
            model_year: vehicle.model_year,
            color: vehicle.color,
            chassis: vehicle.chassis,
            registration_number: vehicle.registration_number,
            odometer_current: vehicle.odometer_current,
            maintenance_info: MaintenanceInfoResponse {
                next_oil_change_odometer: vehicle.next_oil_change_odometer,
                next_oil_change_date: vehicle.next_oil_change_date,
                checklist_frequency_days: vehicle.checklist_frequency_days,
                next_checklist_date: vehicle.next_checklist_date,
                last_oil_change_odometer: vehicle.last_oil_change_odometer,
                last_oil_change_date: vehicle.last_oil_change_date,
                last_checklist_date: vehicle.last_checklist_date,
            },
            created_at: vehicle.created_at,
        }
    }
}
