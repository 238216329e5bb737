//! Modelo de MaintenanceEvent
//!
//! El tipo de mantenimiento es una enumeración cerrada: la detección de
//! cambio de aceite es una comparación directa, no un match de texto libre.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Tipo de mantenimiento - mapea al ENUM maintenance_kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "maintenance_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceKind {
    OilChange,
    Inspection,
    TireService,
    Repair,
    General,
}

impl MaintenanceKind {
    /// Solo los cambios de aceite actualizan el snapshot del vehículo
    pub fn is_oil_change(self) -> bool {
        self == MaintenanceKind::OilChange
    }

    /// Etiqueta legible para reportes cuando el evento no trae descripción
    pub fn label(self) -> &'static str {
        match self {
            MaintenanceKind::OilChange => "Cambio de aceite",
            MaintenanceKind::Inspection => "Inspección",
            MaintenanceKind::TireService => "Servicio de neumáticos",
            MaintenanceKind::Repair => "Reparación",
            MaintenanceKind::General => "Mantenimiento general",
        }
    }
}

/// Evento de mantenimiento - inmutable una vez creado
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceEvent {
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
