use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::checklist_controller::ChecklistController;
use crate::dto::checklist_dto::{
    ChecklistFilters, ChecklistResponse, RegisterChecklistResultRequest, StartChecklistRequest,
};
use crate::dto::common::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_checklist_router() -> Router<AppState> {
    Router::new()
        .route("/", post(start_checklist))
        .route("/", get(list_checklists))
        .route("/:id", get(get_checklist))
        .route("/:id/result", put(register_checklist_result))
        .route("/:id", delete(delete_checklist))
}

async fn start_checklist(
    State(state): State<AppState>,
    Json(request): Json<StartChecklistRequest>,
) -> Result<Json<ApiResponse<ChecklistResponse>>, AppError> {
    let controller = ChecklistController::new(state.pool.clone());
    let response = controller.start(request).await?;
    Ok(Json(response))
}

async fn register_checklist_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RegisterChecklistResultRequest>,
) -> Result<Json<ApiResponse<ChecklistResponse>>, AppError> {
    let controller = ChecklistController::new(state.pool.clone());
    let response = controller.register_result(id, request).await?;
    Ok(Json(response))
}

async fn get_checklist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChecklistResponse>, AppError> {
    let controller = ChecklistController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_checklists(
    State(state): State<AppState>,
    Query(filters): Query<ChecklistFilters>,
) -> Result<Json<Vec<ChecklistResponse>>, AppError> {
    let controller = ChecklistController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn delete_checklist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ChecklistController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
