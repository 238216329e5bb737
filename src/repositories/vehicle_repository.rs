//! Repositorio de vehículos
//!
//! Acceso a la tabla `vehicles`. El borrado es en cascada: los eventos de
//! mantenimiento, checklist y abastecimiento del vehículo se eliminan en la
//! misma transacción (las multas se conservan).

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        plate: String,
        request: CreateVehicleRequest,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                id, plate, make, model, manufacture_year, model_year,
                color, chassis, registration_number, odometer_current,
                next_oil_change_odometer, next_oil_change_date,
                checklist_frequency_days, next_checklist_date, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(plate)
        .bind(request.make)
        .bind(request.model)
        .bind(request.manufacture_year)
        .bind(request.model_year)
        .bind(request.color)
        .bind(request.chassis)
        .bind(request.registration_number)
        .bind(request.odometer_current.unwrap_or(0))
        .bind(request.next_oil_change_odometer)
        .bind(request.next_oil_change_date)
        .bind(request.checklist_frequency_days)
        .bind(request.next_checklist_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Listar la flota, con búsqueda opcional por fragmento de matrícula
    pub async fn find_all(&self, plate_search: Option<&str>) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1::text IS NULL OR plate LIKE '%' || $1 || '%')
            ORDER BY plate
            "#,
        )
        .bind(plate_search)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn plate_exists(
        &self,
        plate: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM vehicles
                WHERE plate = $1 AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(plate)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        plate: Option<String>,
        request: UpdateVehicleRequest,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        // El odómetro nunca retrocede
        if let Some(new_odometer) = request.odometer_current {
            if new_odometer < current.odometer_current {
                return Err(AppError::BadRequest(format!(
                    "El odómetro informado ({}) es menor que el actual del vehículo ({})",
                    new_odometer, current.odometer_current
                )));
            }
        }

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET plate = $2, make = $3, model = $4, manufacture_year = $5,
                model_year = $6, color = $7, chassis = $8,
                registration_number = $9, odometer_current = $10,
                next_oil_change_odometer = $11, next_oil_change_date = $12,
                checklist_frequency_days = $13, next_checklist_date = $14
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(plate.unwrap_or(current.plate))
        .bind(request.make.unwrap_or(current.make))
        .bind(request.model.unwrap_or(current.model))
        .bind(request.manufacture_year.unwrap_or(current.manufacture_year))
        .bind(request.model_year.unwrap_or(current.model_year))
        .bind(request.color.or(current.color))
        .bind(request.chassis.or(current.chassis))
        .bind(request.registration_number.or(current.registration_number))
        .bind(request.odometer_current.unwrap_or(current.odometer_current))
        .bind(request.next_oil_change_odometer.or(current.next_oil_change_odometer))
        .bind(request.next_oil_change_date.or(current.next_oil_change_date))
        .bind(request.checklist_frequency_days.or(current.checklist_frequency_days))
        .bind(request.next_checklist_date.or(current.next_checklist_date))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Eliminar un vehículo y sus eventos dependientes en una transacción.
    /// Las multas quedan como registro histórico.
    pub async fn delete_cascade(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        sqlx::query("DELETE FROM maintenance_events WHERE vehicle_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM checklist_events WHERE vehicle_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM fueling_events WHERE vehicle_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }
}
