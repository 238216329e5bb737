use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::dto::report_dto::{MonthlyReportFilters, ReportFilters};
use crate::services::expense_service::{ExpenseReport, MonthlyExpenseRow};
use crate::services::fuel_service::FuelReport;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/fuel", get(fuel_report))
        .route("/expenses", get(expense_report))
        .route("/expenses/monthly", get(monthly_expenses))
}

async fn fuel_report(
    State(state): State<AppState>,
    Query(filters): Query<ReportFilters>,
) -> Result<Json<FuelReport>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.fuel_report(filters).await?;
    Ok(Json(response))
}

async fn expense_report(
    State(state): State<AppState>,
    Query(filters): Query<ReportFilters>,
) -> Result<Json<ExpenseReport>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.expense_report(filters).await?;
    Ok(Json(response))
}

async fn monthly_expenses(
    State(state): State<AppState>,
    Query(filters): Query<MonthlyReportFilters>,
) -> Result<Json<Vec<MonthlyExpenseRow>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.monthly_expenses(filters).await?;
    Ok(Json(response))
}
