use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::maintenance_dto::{
    CreateMaintenanceRequest, MaintenanceFilters, MaintenanceResponse,
};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::{period_range, validate_optional_positive};

pub struct MaintenanceController {
    repository: MaintenanceRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceResponse>, AppError> {
        request.validate()?;
        validate_optional_positive("cost", request.cost)?;
        if request.odometer.is_some_and(|o| o < 0) {
            return Err(validation_error("odometer", "must be non-negative"));
        }

        let event = self.repository.create(request).await?;

        Ok(ApiResponse::success_with_message(
            MaintenanceResponse::from(event),
            "Mantenimiento registrado exitosamente".to_string(),
        ))
    }

    pub async fn list(
        &self,
        filters: MaintenanceFilters,
    ) -> Result<Vec<MaintenanceResponse>, AppError> {
        let range = period_range(filters.year, filters.month)?;
        let events = self.repository.find(filters.vehicle_id, range).await?;

        Ok(events.into_iter().map(MaintenanceResponse::from).collect())
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        self.repository.delete(id).await?;

        Ok(ApiResponse::message_only(
            "Mantenimiento eliminado exitosamente".to_string(),
        ))
    }
}
