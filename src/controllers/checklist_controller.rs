use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::checklist_dto::{
    ChecklistFilters, ChecklistResponse, RegisterChecklistResultRequest, StartChecklistRequest,
};
use crate::dto::common::ApiResponse;
use crate::repositories::checklist_repository::ChecklistRepository;
use crate::utils::errors::{validation_error, AppError};

pub struct ChecklistController {
    repository: ChecklistRepository,
}

impl ChecklistController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ChecklistRepository::new(pool),
        }
    }

    pub async fn start(
        &self,
        request: StartChecklistRequest,
    ) -> Result<ApiResponse<ChecklistResponse>, AppError> {
        request.validate()?;

        let event = self.repository.start(request).await?;

        Ok(ApiResponse::success_with_message(
            ChecklistResponse::from(event),
            "Checklist iniciado".to_string(),
        ))
    }

    pub async fn register_result(
        &self,
        id: Uuid,
        request: RegisterChecklistResultRequest,
    ) -> Result<ApiResponse<ChecklistResponse>, AppError> {
        request.validate()?;
        if request.odometer.is_some_and(|o| o < 0) {
            return Err(validation_error("odometer", "must be non-negative"));
        }

        let event = self.repository.register_result(id, request).await?;

        Ok(ApiResponse::success_with_message(
            ChecklistResponse::from(event),
            "Resultado del checklist registrado".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ChecklistResponse, AppError> {
        let event = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Checklist no encontrado".to_string()))?;

        Ok(ChecklistResponse::from(event))
    }

    pub async fn list(&self, filters: ChecklistFilters) -> Result<Vec<ChecklistResponse>, AppError> {
        let events = self
            .repository
            .find(filters.vehicle_id, filters.status)
            .await?;

        Ok(events.into_iter().map(ChecklistResponse::from).collect())
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        self.repository.delete(id).await?;

        Ok(ApiResponse::message_only(
            "Checklist eliminado exitosamente".to_string(),
        ))
    }
}
