//! Modelo de ChecklistEvent
//!
//! Ciclo de vida en dos fases: se crea como `pending` sin datos de cierre y
//! una única operación de registro de resultado lo transiciona a `completed`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, Type};
use uuid::Uuid;

/// Estado del checklist - mapea al ENUM checklist_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "checklist_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChecklistStatus {
    Pending,
    Completed,
}

/// Condición de un ítem verificado
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemCondition {
    Ok,
    Issue,
}

/// Ítem individual del checklist, almacenado dentro del JSONB `items`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub name: String,
    pub condition: ItemCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Evento de checklist
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChecklistEvent {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_plate: String,
    pub status: ChecklistStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub odometer: Option<i64>,
    pub performed_by: Option<String>,
    pub items: Json<Vec<ChecklistItem>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
