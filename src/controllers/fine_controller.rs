use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::fine_dto::{CreateFineRequest, FineFilters, FineResponse, UpdateFineRequest};
use crate::repositories::fine_repository::FineRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::validate_optional_positive;

pub struct FineController {
    repository: FineRepository,
}

impl FineController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FineRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateFineRequest,
    ) -> Result<ApiResponse<FineResponse>, AppError> {
        request.validate()?;
        if request.amount <= 0.0 {
            return Err(validation_error("amount", "must be positive"));
        }

        let fine = self.repository.create(request).await?;

        Ok(ApiResponse::success_with_message(
            FineResponse::from(fine),
            "Multa registrada exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateFineRequest,
    ) -> Result<ApiResponse<FineResponse>, AppError> {
        request.validate()?;
        validate_optional_positive("amount", request.amount)?;

        let fine = self.repository.update(id, request).await?;

        Ok(ApiResponse::success_with_message(
            FineResponse::from(fine),
            "Multa actualizada exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, filters: FineFilters) -> Result<Vec<FineResponse>, AppError> {
        let fines = self
            .repository
            .find(filters.vehicle_id, filters.status)
            .await?;

        Ok(fines.into_iter().map(FineResponse::from).collect())
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        self.repository.delete(id).await?;

        Ok(ApiResponse::message_only(
            "Multa eliminada exitosamente".to_string(),
        ))
    }
}
