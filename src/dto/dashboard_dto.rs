use serde::Serialize;

/// Resumen agregado para el dashboard
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_vehicles: i64,
    /// Vehículos con alguna condición vencida (aceite o checklist)
    pub alerts_active: i64,
    /// Vehículos sin vencimientos pero con mantenimiento agendado
    pub scheduled_maintenance: i64,
    pub pending_checklists: i64,
    pub pending_fines: i64,
}
