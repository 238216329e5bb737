//! Modelo de FuelingEvent
//!
//! El abastecimiento es el único evento que exige odómetro obligatorio:
//! la lectura debe ser >= al odómetro actual del vehículo al insertar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Evento de abastecimiento - inmutable una vez creado
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FuelingEvent {
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
