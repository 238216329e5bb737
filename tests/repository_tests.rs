//! Tests de integración de los repositorios
//!
//! Verifican las reglas que viven en SQL: monotonía del odómetro en
//! abastecimientos, borrado en cascada del vehículo y el ciclo de vida en
//! dos fases del checklist. Cada test corre sobre una base efímera con las
//! migraciones aplicadas.

use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use fleet_maintenance::dto::checklist_dto::{
    RegisterChecklistResultRequest, StartChecklistRequest,
};
use fleet_maintenance::dto::fine_dto::CreateFineRequest;
use fleet_maintenance::dto::fueling_dto::CreateFuelingRequest;
use fleet_maintenance::dto::maintenance_dto::CreateMaintenanceRequest;
use fleet_maintenance::dto::vehicle_dto::CreateVehicleRequest;
use fleet_maintenance::models::checklist::{ChecklistItem, ChecklistStatus, ItemCondition};
use fleet_maintenance::models::fine::FineStatus;
use fleet_maintenance::models::maintenance::MaintenanceKind;
use fleet_maintenance::models::vehicle::Vehicle;
use fleet_maintenance::repositories::checklist_repository::ChecklistRepository;
use fleet_maintenance::repositories::fine_repository::FineRepository;
use fleet_maintenance::repositories::fueling_repository::FuelingRepository;
use fleet_maintenance::repositories::maintenance_repository::MaintenanceRepository;
use fleet_maintenance::repositories::vehicle_repository::VehicleRepository;
use fleet_maintenance::utils::errors::AppError;

async fn seed_vehicle(pool: &PgPool, plate: &str, odometer: i64) -> Vehicle {
    let repository = VehicleRepository::new(pool.clone());
    repository
        .create(
            plate.to_string(),
            CreateVehicleRequest {
                plate: plate.to_string(),
                make: "Ford".to_string(),
                model: "Ranger".to_string(),
                manufacture_year: 2021,
                model_year: 2022,
                color: None,
                chassis: None,
                registration_number: None,
                odometer_current: Some(odometer),
                next_oil_change_odometer: None,
                next_oil_change_date: None,
                checklist_frequency_days: Some(7),
                next_checklist_date: None,
            },
        )
        .await
        .unwrap()
}

fn fueling_request(vehicle_id: Uuid, odometer: i64) -> CreateFuelingRequest {
    CreateFuelingRequest {
        vehicle_id,
        fueled_at: Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap(),
        odometer,
        liters: 42.0,
        price_per_liter: 6.1,
        total_cost: None,
        station: None,
        notes: None,
    }
}

#[sqlx::test]
async fn fueling_odometer_must_not_decrease(pool: PgPool) {
    let vehicles = VehicleRepository::new(pool.clone());
    let fuelings = FuelingRepository::new(pool.clone());
    let vehicle = seed_vehicle(&pool, "KLM5678", 10_000).await;

    // Una lectura menor se rechaza sin tocar nada
    let result = fuelings.create(fueling_request(vehicle.id, 9_500)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = vehicles.find_by_id(vehicle.id).await.unwrap().unwrap();
    assert_eq!(stored.odometer_current, 10_000);

    // Una lectura mayor se acepta y pasa a ser el nuevo odómetro
    let (event, _) = fuelings
        .create(fueling_request(vehicle.id, 10_400))
        .await
        .unwrap();
    assert_eq!(event.odometer, 10_400);

    let stored = vehicles.find_by_id(vehicle.id).await.unwrap().unwrap();
    assert_eq!(stored.odometer_current, 10_400);

    // Una lectura igual también es válida
    let result = fuelings.create(fueling_request(vehicle.id, 10_400)).await;
    assert!(result.is_ok());
}

#[sqlx::test]
async fn vehicle_delete_cascades_events_but_keeps_fines(pool: PgPool) {
    let vehicles = VehicleRepository::new(pool.clone());
    let maintenance = MaintenanceRepository::new(pool.clone());
    let checklists = ChecklistRepository::new(pool.clone());
    let fuelings = FuelingRepository::new(pool.clone());
    let fines = FineRepository::new(pool.clone());
    let vehicle = seed_vehicle(&pool, "NOP1234", 20_000).await;

    maintenance
        .create(CreateMaintenanceRequest {
            vehicle_id: vehicle.id,
            kind: MaintenanceKind::Repair,
            description: Some("Cambio de pastillas de freno".to_string()),
            performed_at: Utc.with_ymd_and_hms(2024, 4, 2, 15, 0, 0).unwrap(),
            cost: Some(180.0),
            odometer: Some(19_500),
            performed_by: None,
            next_oil_change_odometer: None,
            next_oil_change_date: None,
        })
        .await
        .unwrap();
    checklists
        .start(StartChecklistRequest {
            vehicle_id: vehicle.id,
            started_at: None,
            performed_by: None,
        })
        .await
        .unwrap();
    fuelings
        .create(fueling_request(vehicle.id, 20_300))
        .await
        .unwrap();
    fines
        .create(CreateFineRequest {
            vehicle_id: vehicle.id,
            infraction_date: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            description: "Exceso de velocidad".to_string(),
            amount: 250.0,
            due_date: None,
            status: Some(FineStatus::Pending),
            paid_at: None,
        })
        .await
        .unwrap();

    vehicles.delete_cascade(vehicle.id).await.unwrap();

    assert!(vehicles.find_by_id(vehicle.id).await.unwrap().is_none());
    assert!(maintenance.find(Some(vehicle.id), None).await.unwrap().is_empty());
    assert!(checklists.find(Some(vehicle.id), None).await.unwrap().is_empty());
    assert!(fuelings.find(Some(vehicle.id), None).await.unwrap().is_empty());

    // Las multas sobreviven como registro histórico
    let remaining = fines.find(Some(vehicle.id), None).await.unwrap();
    assert_eq!(remaining.len(), 1);
}

#[sqlx::test]
async fn checklist_completes_exactly_once(pool: PgPool) {
    let vehicles = VehicleRepository::new(pool.clone());
    let checklists = ChecklistRepository::new(pool.clone());
    let vehicle = seed_vehicle(&pool, "QRS9012", 5_000).await;

    let started = checklists
        .start(StartChecklistRequest {
            vehicle_id: vehicle.id,
            started_at: None,
            performed_by: Some("Laura".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(started.status, ChecklistStatus::Pending);
    assert!(started.completed_at.is_none());
    assert!(started.odometer.is_none());

    let result_request = || RegisterChecklistResultRequest {
        completed_at: None,
        // Lectura menor a la almacenada: se ignora en silencio
        odometer: Some(4_000),
        items: vec![ChecklistItem {
            name: "Luces".to_string(),
            condition: ItemCondition::Ok,
            note: None,
        }],
        notes: None,
        performed_by: None,
    };

    let completed = checklists
        .register_result(started.id, result_request())
        .await
        .unwrap();
    assert_eq!(completed.status, ChecklistStatus::Completed);
    assert!(completed.completed_at.is_some());
    assert_eq!(completed.odometer, Some(4_000));

    // El odómetro del vehículo no retrocede por un checklist
    let stored = vehicles.find_by_id(vehicle.id).await.unwrap().unwrap();
    assert_eq!(stored.odometer_current, 5_000);
    assert!(stored.next_checklist_date.is_some());

    // Un segundo registro sobre el mismo checklist no encuentra nada
    let second = checklists.register_result(started.id, result_request()).await;
    assert!(matches!(second, Err(AppError::NotFound(_))));
}
