use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::checklist::{ChecklistEvent, ChecklistItem, ChecklistStatus};

/// Request para iniciar un checklist (queda `pending`)
#[derive(Debug, Deserialize, Validate)]
pub struct StartChecklistRequest {
    pub vehicle_id: Uuid,
    /// Por defecto, el instante actual
    pub started_at: Option<DateTime<Utc>>,
    pub performed_by: Option<String>,
}

/// Request para registrar el resultado de un checklist pendiente
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterChecklistResultRequest {
    /// Por defecto, el instante actual
    pub completed_at: Option<DateTime<Utc>>,
    pub odometer: Option<i64>,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
    pub performed_by: Option<String>,
}

/// Filtros de listado de checklists
#[derive(Debug, Deserialize)]
pub struct ChecklistFilters {
    pub vehicle_id: Option<Uuid>,
    pub status: Option<ChecklistStatus>,
}

/// Response de checklist
#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_plate: String,
    pub status: ChecklistStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub odometer: Option<i64>,
    pub performed_by: Option<String>,
    pub items: Vec<ChecklistItem>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ChecklistEvent> for ChecklistResponse {
    fn from(event: ChecklistEvent) -> Self {
        Self {
            id: event.id,
            vehicle_id: event.vehicle_id,
            vehicle_plate: event.vehicle_plate,
            status: event.status,
            started_at: event.started_at,
            completed_at: event.completed_at,
            odometer: event.odometer,
            performed_by: event.performed_by,
            items: event.items.0,
            notes: event.notes,
            created_at: event.created_at,
        }
    }
}
