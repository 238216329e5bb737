use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::DashboardSummary;
use crate::services::alert_service::MaintenanceAlert;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(dashboard_summary))
        .route("/maintenance-schedule", get(maintenance_schedule))
}

async fn dashboard_summary(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.summary().await?;
    Ok(Json(response))
}

async fn maintenance_schedule(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaintenanceAlert>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.maintenance_schedule().await?;
    Ok(Json(response))
}
