//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como se persiste en PostgreSQL.
//! El snapshot de mantenimiento (`maintenanceInfo`) vive desnormalizado en
//! columnas planas del propio vehículo y se actualiza como efecto colateral
//! de registrar eventos de mantenimiento, checklist y abastecimiento.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
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
    // Snapshot de mantenimiento
    pub next_oil_change_odometer: Option<i64>,
    pub next_oil_change_date: Option<DateTime<Utc>>,
    pub checklist_frequency_days: Option<i32>,
    pub next_checklist_date: Option<DateTime<Utc>>,
    pub last_oil_change_odometer: Option<i64>,
    pub last_oil_change_date: Option<DateTime<Utc>>,
    pub last_checklist_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
