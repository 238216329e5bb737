use serde::Deserialize;
use uuid::Uuid;

/// Filtros comunes de los reportes (combustible y gastos)
#[derive(Debug, Deserialize)]
pub struct ReportFilters {
    pub vehicle_id: Option<Uuid>,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Filtro del desglose mensual de gastos
#[derive(Debug, Deserialize)]
pub struct MonthlyReportFilters {
    pub year: i32,
}
