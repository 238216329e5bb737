//! Repositorio de eventos de mantenimiento
//!
//! El alta de un cambio de aceite actualiza el snapshot del vehículo en la
//! misma transacción que inserta el evento: o se persisten ambos o ninguno.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::maintenance_dto::CreateMaintenanceRequest;
use crate::models::maintenance::MaintenanceEvent;
use crate::utils::errors::AppError;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        request: CreateMaintenanceRequest,
    ) -> Result<MaintenanceEvent, AppError> {
        let mut tx = self.pool.begin().await?;

        let vehicle: Option<(String,)> =
            sqlx::query_as("SELECT plate FROM vehicles WHERE id = $1 FOR UPDATE")
                .bind(request.vehicle_id)
                .fetch_optional(&mut *tx)
                .await?;
        let (plate,) = vehicle
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let event = sqlx::query_as::<_, MaintenanceEvent>(
            r#"
            INSERT INTO maintenance_events (
                id, vehicle_id, vehicle_plate, kind, description,
                performed_at, cost, odometer, performed_by, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.vehicle_id)
        .bind(&plate)
        .bind(request.kind)
        .bind(request.description)
        .bind(request.performed_at)
        .bind(request.cost)
        .bind(request.odometer)
        .bind(request.performed_by)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        if request.kind.is_oil_change() {
            // Los próximos umbrales vienen explícitos en el request,
            // incluso si son null
            sqlx::query(
                r#"
                UPDATE vehicles
                SET last_oil_change_date = $2,
                    last_oil_change_odometer = $3,
                    next_oil_change_odometer = $4,
                    next_oil_change_date = $5
                WHERE id = $1
                "#,
            )
            .bind(request.vehicle_id)
            .bind(event.performed_at)
            .bind(event.odometer)
            .bind(request.next_oil_change_odometer)
            .bind(request.next_oil_change_date)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(event)
    }

    pub async fn find(
        &self,
        vehicle_id: Option<Uuid>,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<MaintenanceEvent>, AppError> {
        let (from, to) = match range {
            Some((from, to)) => (Some(from), Some(to)),
            None => (None, None),
        };

        let events = sqlx::query_as::<_, MaintenanceEvent>(
            r#"
            SELECT * FROM maintenance_events
            WHERE ($1::uuid IS NULL OR vehicle_id = $1)
              AND ($2::timestamptz IS NULL OR performed_at >= $2)
              AND ($3::timestamptz IS NULL OR performed_at <= $3)
            ORDER BY performed_at DESC
            "#,
        )
        .bind(vehicle_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM maintenance_events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Mantenimiento no encontrado".to_string()));
        }
        Ok(())
    }
}
