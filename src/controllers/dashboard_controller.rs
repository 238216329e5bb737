use chrono::Utc;
use sqlx::PgPool;

use crate::dto::dashboard_dto::DashboardSummary;
use crate::repositories::checklist_repository::ChecklistRepository;
use crate::repositories::fine_repository::FineRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::alert_service::{build_schedule, summarize, MaintenanceAlert};
use crate::utils::errors::AppError;

pub struct DashboardController {
    vehicles: VehicleRepository,
    checklists: ChecklistRepository,
    fines: FineRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            checklists: ChecklistRepository::new(pool.clone()),
            fines: FineRepository::new(pool),
        }
    }

    /// Resumen del dashboard: todo se recalcula desde el estado actual en
    /// cada request, no hay materialización
    pub async fn summary(&self) -> Result<DashboardSummary, AppError> {
        let vehicles = self.vehicles.find_all(None).await?;
        let counts = summarize(&vehicles, Utc::now().date_naive());

        Ok(DashboardSummary {
            total_vehicles: vehicles.len() as i64,
            alerts_active: counts.alerts_active,
            scheduled_maintenance: counts.scheduled_maintenance,
            pending_checklists: self.checklists.count_pending().await?,
            pending_fines: self.fines.count_pending().await?,
        })
    }

    /// Lista ordenada de próximos mantenimientos de toda la flota
    pub async fn maintenance_schedule(&self) -> Result<Vec<MaintenanceAlert>, AppError> {
        let vehicles = self.vehicles.find_all(None).await?;

        Ok(build_schedule(&vehicles, Utc::now().date_naive()))
    }
}
