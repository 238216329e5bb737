use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters, VehicleResponse,
};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, validation_error, AppError};
use crate::utils::validation::{normalize_plate, validate_plate};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let plate = normalize_plate(&request.plate);
        if validate_plate(&plate).is_err() {
            return Err(validation_error(
                "plate",
                "must contain 5 to 10 alphanumeric characters",
            ));
        }

        if self.repository.plate_exists(&plate, None).await? {
            return Err(conflict_error("Vehicle", "plate", &plate));
        }

        let vehicle = self.repository.create(plate, request).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list(&self, filters: VehicleFilters) -> Result<Vec<VehicleResponse>, AppError> {
        let plate_search = filters.plate.as_deref().map(normalize_plate);
        let vehicles = self.repository.find_all(plate_search.as_deref()).await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let plate = match request.plate.as_deref() {
            Some(raw) => {
                let normalized = normalize_plate(raw);
                if validate_plate(&normalized).is_err() {
                    return Err(validation_error(
                        "plate",
                        "must contain 5 to 10 alphanumeric characters",
                    ));
                }
                if self.repository.plate_exists(&normalized, Some(id)).await? {
                    return Err(conflict_error("Vehicle", "plate", &normalized));
                }
                Some(normalized)
            }
            None => None,
        };

        let vehicle = self.repository.update(id, plate, request).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        self.repository.delete_cascade(id).await?;

        Ok(ApiResponse::message_only(
            "Vehículo y sus eventos eliminados exitosamente".to_string(),
        ))
    }
}
