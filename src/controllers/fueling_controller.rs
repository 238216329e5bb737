use sqlx::PgPool;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::fueling_dto::{
    CreateFuelingRequest, FuelingFilters, FuelingRegisteredResponse, FuelingResponse,
};
use crate::repositories::fueling_repository::FuelingRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::{period_range, validate_optional_positive};

pub struct FuelingController {
    repository: FuelingRepository,
}

impl FuelingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FuelingRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateFuelingRequest,
    ) -> Result<ApiResponse<FuelingRegisteredResponse>, AppError> {
        request.validate()?;
        if request.liters <= 0.0 {
            return Err(validation_error("liters", "must be positive"));
        }
        if request.price_per_liter <= 0.0 {
            return Err(validation_error("price_per_liter", "must be positive"));
        }
        validate_optional_positive("total_cost", request.total_cost)?;
        if request.odometer < 0 {
            return Err(validation_error("odometer", "must be non-negative"));
        }

        let (event, alert) = self.repository.create(request).await?;

        Ok(ApiResponse::success_with_message(
            FuelingRegisteredResponse {
                event: FuelingResponse::from(event),
                alert,
            },
            "Abastecimiento registrado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, filters: FuelingFilters) -> Result<Vec<FuelingResponse>, AppError> {
        let range = period_range(filters.year, filters.month)?;
        let events = self.repository.find(filters.vehicle_id, range).await?;

        Ok(events.into_iter().map(FuelingResponse::from).collect())
    }
}
