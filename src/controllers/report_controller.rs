use sqlx::PgPool;

use crate::dto::report_dto::{MonthlyReportFilters, ReportFilters};
use crate::models::fine::FineEvent;
use crate::models::fueling::FuelingEvent;
use crate::models::maintenance::MaintenanceEvent;
use crate::repositories::fine_repository::FineRepository;
use crate::repositories::fueling_repository::FuelingRepository;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::services::expense_service::{
    build_ledger, monthly_breakdown, ExpenseCategory, ExpenseReport, ExpenseSource,
    MonthlyExpenseRow,
};
use crate::services::fuel_service::{analyze, FuelReport};
use crate::utils::errors::AppError;
use crate::utils::validation::period_range;

pub struct ReportController {
    maintenance: MaintenanceRepository,
    fuelings: FuelingRepository,
    fines: FineRepository,
}

impl ReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            maintenance: MaintenanceRepository::new(pool.clone()),
            fuelings: FuelingRepository::new(pool.clone()),
            fines: FineRepository::new(pool),
        }
    }

    /// Reporte de consumo de combustible (viajes + totales)
    pub async fn fuel_report(&self, filters: ReportFilters) -> Result<FuelReport, AppError> {
        let range = period_range(filters.year, filters.month)?;
        let events = self.fuelings.find(filters.vehicle_id, range).await?;

        Ok(analyze(events))
    }

    /// Libro mayor de gastos combinado (mantenimientos + combustible +
    /// multas pagadas)
    pub async fn expense_report(&self, filters: ReportFilters) -> Result<ExpenseReport, AppError> {
        let range = period_range(filters.year, filters.month)?;
        let sources = self.load_sources(filters.vehicle_id, range).await?;

        Ok(build_ledger(sources))
    }

    /// Desglose mensual de gastos por categoría para un año dado
    pub async fn monthly_expenses(
        &self,
        filters: MonthlyReportFilters,
    ) -> Result<Vec<MonthlyExpenseRow>, AppError> {
        let range = period_range(Some(filters.year), None)?;
        let sources = self.load_sources(None, range).await?;
        let report = build_ledger(sources);

        Ok(monthly_breakdown(&report.entries, filters.year))
    }

    async fn load_sources(
        &self,
        vehicle_id: Option<uuid::Uuid>,
        range: Option<(chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>)>,
    ) -> Result<Vec<ExpenseSource>, AppError> {
        let maintenance = self.maintenance.find(vehicle_id, range).await?;
        let fuelings = self.fuelings.find(vehicle_id, range).await?;
        let fines = self.fines.find_paid(vehicle_id, range).await?;

        let mut sources = Vec::with_capacity(maintenance.len() + fuelings.len() + fines.len());
        sources.extend(maintenance.into_iter().map(maintenance_source));
        sources.extend(fuelings.into_iter().map(fueling_source));
        sources.extend(fines.into_iter().map(fine_source));

        Ok(sources)
    }
}

fn maintenance_source(event: MaintenanceEvent) -> ExpenseSource {
    ExpenseSource {
        category: ExpenseCategory::Maintenance,
        vehicle_id: event.vehicle_id,
        vehicle_plate: event.vehicle_plate,
        description: event
            .description
            .unwrap_or_else(|| event.kind.label().to_string()),
        amount: event.cost,
        date: Some(event.performed_at),
    }
}

fn fueling_source(event: FuelingEvent) -> ExpenseSource {
    let description = match &event.station {
        Some(station) => format!("Abastecimiento - {}", station),
        None => "Abastecimiento".to_string(),
    };
    ExpenseSource {
        category: ExpenseCategory::Fueling,
        vehicle_id: event.vehicle_id,
        vehicle_plate: event.vehicle_plate,
        description,
        amount: Some(event.total_cost),
        date: Some(event.fueled_at),
    }
}

fn fine_source(fine: FineEvent) -> ExpenseSource {
    ExpenseSource {
        category: ExpenseCategory::Fine,
        vehicle_id: fine.vehicle_id,
        vehicle_plate: fine.vehicle_plate,
        description: fine.description,
        amount: Some(fine.amount),
        date: fine.paid_at,
    }
}
