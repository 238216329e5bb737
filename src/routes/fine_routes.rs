use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::fine_controller::FineController;
use crate::dto::common::ApiResponse;
use crate::dto::fine_dto::{CreateFineRequest, FineFilters, FineResponse, UpdateFineRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fine_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_fine))
        .route("/", get(list_fines))
        .route("/:id", put(update_fine))
        .route("/:id", delete(delete_fine))
}

async fn create_fine(
    State(state): State<AppState>,
    Json(request): Json<CreateFineRequest>,
) -> Result<Json<ApiResponse<FineResponse>>, AppError> {
    let controller = FineController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_fines(
    State(state): State<AppState>,
    Query(filters): Query<FineFilters>,
) -> Result<Json<Vec<FineResponse>>, AppError> {
    let controller = FineController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn update_fine(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFineRequest>,
) -> Result<Json<ApiResponse<FineResponse>>, AppError> {
    let controller = FineController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_fine(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = FineController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
