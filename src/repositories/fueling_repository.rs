//! Repositorio de abastecimientos
//!
//! El alta valida la monotonía del odómetro contra el vehículo bloqueado y
//! sube `odometer_current` en la misma transacción que inserta el evento.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::fueling_dto::CreateFuelingRequest;
use crate::models::fueling::FuelingEvent;
use crate::models::vehicle::Vehicle;
use crate::services::round2;
use crate::utils::errors::AppError;

pub struct FuelingRepository {
    pool: PgPool,
}

impl FuelingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registrar un abastecimiento. Devuelve el evento y, si la nueva
    /// lectura alcanza el umbral de cambio de aceite, un aviso que viaja en
    /// la respuesta pero no se persiste.
    pub async fn create(
        &self,
        request: CreateFuelingRequest,
    ) -> Result<(FuelingEvent, Option<String>), AppError> {
        let mut tx = self.pool.begin().await?;

        let vehicle =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1 FOR UPDATE")
                .bind(request.vehicle_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if request.odometer < vehicle.odometer_current {
            return Err(AppError::BadRequest(format!(
                "El odómetro informado ({}) es menor que el actual del vehículo ({})",
                request.odometer, vehicle.odometer_current
            )));
        }

        let total_cost = request
            .total_cost
            .unwrap_or_else(|| round2(request.liters * request.price_per_liter));

        let event = sqlx::query_as::<_, FuelingEvent>(
            r#"
            INSERT INTO fueling_events (
                id, vehicle_id, vehicle_plate, fueled_at, odometer,
                liters, price_per_liter, total_cost, station, notes, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.vehicle_id)
        .bind(&vehicle.plate)
        .bind(request.fueled_at)
        .bind(request.odometer)
        .bind(request.liters)
        .bind(request.price_per_liter)
        .bind(total_cost)
        .bind(request.station)
        .bind(request.notes)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE vehicles SET odometer_current = $2 WHERE id = $1")
            .bind(request.vehicle_id)
            .bind(request.odometer)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let alert = vehicle
            .next_oil_change_odometer
            .filter(|next| request.odometer >= *next)
            .map(|next| {
                format!(
                    "El vehículo {} alcanzó el odómetro de cambio de aceite ({} km)",
                    vehicle.plate, next
                )
            });

        Ok((event, alert))
    }

    pub async fn find(
        &self,
        vehicle_id: Option<Uuid>,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<FuelingEvent>, AppError> {
        let (from, to) = match range {
            Some((from, to)) => (Some(from), Some(to)),
            None => (None, None),
        };

        let events = sqlx::query_as::<_, FuelingEvent>(
            r#"
            SELECT * FROM fueling_events
            WHERE ($1::uuid IS NULL OR vehicle_id = $1)
              AND ($2::timestamptz IS NULL OR fueled_at >= $2)
              AND ($3::timestamptz IS NULL OR fueled_at <= $3)
            ORDER BY vehicle_id, fueled_at, odometer
            "#,
        )
        .bind(vehicle_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }
}
