use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::common::ApiResponse;
use crate::dto::maintenance_dto::{
    CreateMaintenanceRequest, MaintenanceFilters, MaintenanceResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_maintenance))
        .route("/", get(list_maintenance))
        .route("/:id", delete(delete_maintenance))
}

async fn create_maintenance(
    State(state): State<AppState>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_maintenance(
    State(state): State<AppState>,
    Query(filters): Query<MaintenanceFilters>,
) -> Result<Json<Vec<MaintenanceResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn delete_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
