//! Repositorio de checklists
//!
//! Dos fases: el inicio inserta el evento `pending` y marca el snapshot del
//! vehículo; el registro de resultado transiciona a `completed` (una sola
//! vez, el UPDATE exige status pendiente) y recalcula la próxima fecha.
//! Cada fase es una transacción.

use chrono::{DateTime, Duration, Utc};
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::dto::checklist_dto::{RegisterChecklistResultRequest, StartChecklistRequest};
use crate::models::checklist::{ChecklistEvent, ChecklistStatus};
use crate::utils::errors::AppError;

pub struct ChecklistRepository {
    pool: PgPool,
}

impl ChecklistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn start(&self, request: StartChecklistRequest) -> Result<ChecklistEvent, AppError> {
        let mut tx = self.pool.begin().await?;

        let vehicle: Option<(String, Option<i32>)> = sqlx::query_as(
            "SELECT plate, checklist_frequency_days FROM vehicles WHERE id = $1 FOR UPDATE",
        )
        .bind(request.vehicle_id)
        .fetch_optional(&mut *tx)
        .await?;
        let (plate, frequency_days) = vehicle
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let started_at = request.started_at.unwrap_or_else(Utc::now);

        let event = sqlx::query_as::<_, ChecklistEvent>(
            r#"
            INSERT INTO checklist_events (
                id, vehicle_id, vehicle_plate, status, started_at,
                performed_by, items, created_at
            )
            VALUES ($1, $2, $3, 'pending', $4, $5, '[]'::jsonb, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.vehicle_id)
        .bind(&plate)
        .bind(started_at)
        .bind(request.performed_by)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        // Al iniciar, el vehículo sale de inmediato de la vista de vencidos
        let next_checklist = frequency_days
            .map(|days| started_at + Duration::days(i64::from(days)));
        sqlx::query(
            r#"
            UPDATE vehicles
            SET last_checklist_date = $2,
                next_checklist_date = COALESCE($3, next_checklist_date)
            WHERE id = $1
            "#,
        )
        .bind(request.vehicle_id)
        .bind(started_at)
        .bind(next_checklist)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(event)
    }

    pub async fn register_result(
        &self,
        id: Uuid,
        request: RegisterChecklistResultRequest,
    ) -> Result<ChecklistEvent, AppError> {
        let mut tx = self.pool.begin().await?;

        let completed_at = request.completed_at.unwrap_or_else(Utc::now);

        // Solo un checklist pendiente puede completarse; un segundo intento
        // no matchea ninguna fila
        let event = sqlx::query_as::<_, ChecklistEvent>(
            r#"
            UPDATE checklist_events
            SET status = 'completed',
                completed_at = $2,
                odometer = $3,
                items = $4,
                notes = COALESCE($5, notes),
                performed_by = COALESCE($6, performed_by)
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(completed_at)
        .bind(request.odometer)
        .bind(Json(request.items))
        .bind(request.notes)
        .bind(request.performed_by)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("Checklist pendiente no encontrado".to_string())
        })?;

        let vehicle: Option<(Option<i32>,)> = sqlx::query_as(
            "SELECT checklist_frequency_days FROM vehicles WHERE id = $1 FOR UPDATE",
        )
        .bind(event.vehicle_id)
        .fetch_optional(&mut *tx)
        .await?;
        let (frequency_days,) = vehicle
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        // El odómetro del checklist solo sube el valor almacenado; una
        // lectura menor se ignora en silencio (a diferencia del
        // abastecimiento, que la rechaza)
        let next_checklist = frequency_days
            .map(|days| completed_at + Duration::days(i64::from(days)));
        sqlx::query(
            r#"
            UPDATE vehicles
            SET last_checklist_date = $2,
                next_checklist_date = COALESCE($3, next_checklist_date),
                odometer_current = GREATEST(odometer_current, COALESCE($4, odometer_current))
            WHERE id = $1
            "#,
        )
        .bind(event.vehicle_id)
        .bind(completed_at)
        .bind(next_checklist)
        .bind(event.odometer)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(event)
    }

    pub async fn find(
        &self,
        vehicle_id: Option<Uuid>,
        status: Option<ChecklistStatus>,
    ) -> Result<Vec<ChecklistEvent>, AppError> {
        let events = sqlx::query_as::<_, ChecklistEvent>(
            r#"
            SELECT * FROM checklist_events
            WHERE ($1::uuid IS NULL OR vehicle_id = $1)
              AND ($2::checklist_status IS NULL OR status = $2)
            ORDER BY started_at DESC
            "#,
        )
        .bind(vehicle_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ChecklistEvent>, AppError> {
        let event =
            sqlx::query_as::<_, ChecklistEvent>("SELECT * FROM checklist_events WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(event)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM checklist_events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Checklist no encontrado".to_string()));
        }
        Ok(())
    }

    pub async fn count_pending(&self) -> Result<i64, AppError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM checklist_events WHERE status = 'pending'")
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
