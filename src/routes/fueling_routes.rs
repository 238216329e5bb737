use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::fueling_controller::FuelingController;
use crate::dto::common::ApiResponse;
use crate::dto::fueling_dto::{
    CreateFuelingRequest, FuelingFilters, FuelingRegisteredResponse, FuelingResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

// Los abastecimientos son inmutables: solo alta y listado
pub fn create_fueling_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_fueling))
        .route("/", get(list_fuelings))
}

async fn create_fueling(
    State(state): State<AppState>,
    Json(request): Json<CreateFuelingRequest>,
) -> Result<Json<ApiResponse<FuelingRegisteredResponse>>, AppError> {
    let controller = FuelingController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_fuelings(
    State(state): State<AppState>,
    Query(filters): Query<FuelingFilters>,
) -> Result<Json<Vec<FuelingResponse>>, AppError> {
    let controller = FuelingController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}
