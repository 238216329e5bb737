//! Repositorio de multas
//!
//! Las multas referencian al vehículo por id y matrícula desnormalizada,
//! pero no participan del borrado en cascada.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::fine_dto::{CreateFineRequest, UpdateFineRequest};
use crate::models::fine::{resolve_paid_at, FineEvent, FineStatus};
use crate::utils::errors::AppError;

pub struct FineRepository {
    pool: PgPool,
}

impl FineRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateFineRequest) -> Result<FineEvent, AppError> {
        let vehicle: Option<(String,)> =
            sqlx::query_as("SELECT plate FROM vehicles WHERE id = $1")
                .bind(request.vehicle_id)
                .fetch_optional(&self.pool)
                .await?;
        let (plate,) = vehicle
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let status = request.status.unwrap_or(FineStatus::Pending);
        let paid_at = resolve_paid_at(status, request.paid_at, Utc::now());

        let fine = sqlx::query_as::<_, FineEvent>(
            r#"
            INSERT INTO fine_events (
                id, vehicle_id, vehicle_plate, infraction_date, description,
                amount, due_date, status, paid_at, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.vehicle_id)
        .bind(&plate)
        .bind(request.infraction_date)
        .bind(request.description)
        .bind(request.amount)
        .bind(request.due_date)
        .bind(status)
        .bind(paid_at)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(fine)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateFineRequest,
    ) -> Result<FineEvent, AppError> {
        let current = sqlx::query_as::<_, FineEvent>("SELECT * FROM fine_events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Multa no encontrada".to_string()))?;

        let status = request.status.unwrap_or(current.status);
        let paid_at = resolve_paid_at(status, request.paid_at.or(current.paid_at), Utc::now());

        let fine = sqlx::query_as::<_, FineEvent>(
            r#"
            UPDATE fine_events
            SET description = $2, amount = $3, due_date = $4,
                status = $5, paid_at = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.description.unwrap_or(current.description))
        .bind(request.amount.unwrap_or(current.amount))
        .bind(request.due_date.or(current.due_date))
        .bind(status)
        .bind(paid_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(fine)
    }

    pub async fn find(
        &self,
        vehicle_id: Option<Uuid>,
        status: Option<FineStatus>,
    ) -> Result<Vec<FineEvent>, AppError> {
        let fines = sqlx::query_as::<_, FineEvent>(
            r#"
            SELECT * FROM fine_events
            WHERE ($1::uuid IS NULL OR vehicle_id = $1)
              AND ($2::fine_status IS NULL OR status = $2)
            ORDER BY infraction_date DESC
            "#,
        )
        .bind(vehicle_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(fines)
    }

    /// Multas pagadas dentro de un rango de fecha de pago, para el reporte
    /// de gastos
    pub async fn find_paid(
        &self,
        vehicle_id: Option<Uuid>,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<FineEvent>, AppError> {
        let (from, to) = match range {
            Some((from, to)) => (Some(from), Some(to)),
            None => (None, None),
        };

        let fines = sqlx::query_as::<_, FineEvent>(
            r#"
            SELECT * FROM fine_events
            WHERE status = 'paid'
              AND ($1::uuid IS NULL OR vehicle_id = $1)
              AND ($2::timestamptz IS NULL OR paid_at >= $2)
              AND ($3::timestamptz IS NULL OR paid_at <= $3)
            ORDER BY paid_at DESC
            "#,
        )
        .bind(vehicle_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(fines)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM fine_events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Multa no encontrada".to_string()));
        }
        Ok(())
    }

    pub async fn count_pending(&self) -> Result<i64, AppError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM fine_events WHERE status = 'pending'")
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
