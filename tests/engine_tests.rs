//! Tests de integración de los motores de cálculo
//!
//! Ejercitan el motor de alertas, el analizador de combustible y el
//! agregador de gastos a través de la API pública de la librería.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use fleet_maintenance::models::fueling::FuelingEvent;
use fleet_maintenance::models::vehicle::Vehicle;
use fleet_maintenance::services::alert_service::{
    build_schedule, classify_checklist, classify_oil, summarize, AlertStatus,
};
use fleet_maintenance::services::expense_service::{
    build_ledger, monthly_breakdown, ExpenseCategory, ExpenseSource,
};
use fleet_maintenance::services::fuel_service::analyze;

fn vehicle(plate: &str, odometer: i64) -> Vehicle {
    Vehicle {
        id: Uuid::new_v4(),
        plate: plate.to_string(),
        make: "Volkswagen".to_string(),
        model: "Saveiro".to_string(),
        manufacture_year: 2019,
        model_year: 2020,
        color: None,
        chassis: None,
        registration_number: None,
        odometer_current: odometer,
        next_oil_change_odometer: None,
        next_oil_change_date: None,
        checklist_frequency_days: None,
        next_checklist_date: None,
        last_oil_change_odometer: None,
        last_oil_change_date: None,
        last_checklist_date: None,
        created_at: Utc::now(),
    }
}

fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

fn fueling(vehicle_id: Uuid, day: u32, odometer: i64, liters: f64) -> FuelingEvent {
    FuelingEvent {
        id: Uuid::new_v4(),
        vehicle_id,
        vehicle_plate: "XYZ9876".to_string(),
        fueled_at: ts(2024, 5, day),
        odometer,
        liters,
        price_per_liter: 6.0,
        total_cost: liters * 6.0,
        station: None,
        notes: None,
        created_at: Utc::now(),
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
}

#[test]
fn schedule_is_idempotent_on_unchanged_data() {
    let mut a = vehicle("AAA1111", 80_000);
    a.next_oil_change_odometer = Some(75_000);
    a.next_oil_change_date = Some(ts(2024, 5, 1));

    let mut b = vehicle("BBB2222", 30_000);
    b.next_checklist_date = Some(ts(2024, 5, 22));

    let mut c = vehicle("CCC3333", 10_000);
    c.next_oil_change_date = Some(ts(2024, 7, 15));

    let fleet = vec![a, b, c];
    let first = build_schedule(&fleet, today());
    let second = build_schedule(&fleet, today());

    assert_eq!(first.len(), second.len());
    for (x, y) in first.iter().zip(second.iter()) {
        assert_eq!(x.vehicle_id, y.vehicle_id);
        assert_eq!(x.item, y.item);
        assert_eq!(x.status, y.status);
        assert_eq!(x.due_date, y.due_date);
    }

    // Vencido primero, luego por vencer, luego futuro
    assert_eq!(first[0].plate, "AAA1111");
    assert_eq!(first[0].status, AlertStatus::OverdueDateAndOdometer);
    assert_eq!(first[1].plate, "BBB2222");
    assert_eq!(first[1].status, AlertStatus::DueSoon);
    assert_eq!(first[2].plate, "CCC3333");
    assert_eq!(first[2].status, AlertStatus::Ok);
}

#[test]
fn overdue_takes_precedence_over_scheduled_in_summary() {
    // Aceite vencido por odómetro + checklist agendado a futuro
    let mut v = vehicle("DDD4444", 90_000);
    v.next_oil_change_odometer = Some(85_000);
    v.next_checklist_date = Some(ts(2024, 8, 1));

    assert!(classify_oil(&v, today()).is_overdue());
    assert_eq!(classify_checklist(&v, today()), AlertStatus::Ok);

    let counts = summarize(std::slice::from_ref(&v), today());
    assert_eq!(counts.alerts_active, 1);
    assert_eq!(counts.scheduled_maintenance, 0);
}

#[test]
fn fuel_report_chains_trips_and_survives_odometer_reset() {
    let v = Uuid::new_v4();
    let report = analyze(vec![
        fueling(v, 1, 1000, 40.0),
        fueling(v, 2, 1400, 35.0),
        fueling(v, 3, 1390, 30.0),
        fueling(v, 4, 1800, 38.0),
    ]);

    // Orden de presentación: del más reciente al más antiguo
    let oldest_first: Vec<_> = report.trips.iter().rev().collect();
    let distances: Vec<Option<f64>> = oldest_first.iter().map(|t| t.distance).collect();
    assert_eq!(distances, vec![None, Some(400.0), None, Some(410.0)]);

    assert_eq!(report.summary.total_distance, 810.0);
    assert_eq!(report.summary.total_liters, 143.0);
}

#[test]
fn expense_ledger_total_matches_visible_entries() {
    let vid = Uuid::new_v4();
    let entry = |category, amount: Option<f64>, month: u32| ExpenseSource {
        category,
        vehicle_id: vid,
        vehicle_plate: "XYZ9876".to_string(),
        description: "gasto".to_string(),
        amount,
        date: Some(ts(2024, month, 10)),
    };

    let report = build_ledger(vec![
        entry(ExpenseCategory::Maintenance, Some(350.0), 1),
        entry(ExpenseCategory::Fueling, Some(412.33), 2),
        entry(ExpenseCategory::Fine, Some(195.23), 3),
        entry(ExpenseCategory::Maintenance, Some(0.0), 4),
        entry(ExpenseCategory::Fine, Some(-10.0), 5),
        entry(ExpenseCategory::Maintenance, None, 6),
    ]);

    assert_eq!(report.entries.len(), 3);
    let sum: f64 = report.entries.iter().map(|e| e.amount).sum();
    assert!((report.total - sum).abs() < 0.005);
    assert!(report.entries.iter().all(|e| e.amount > 0.0));

    let rows = monthly_breakdown(&report.entries, 2024);
    let yearly_total: f64 = rows.iter().map(|r| r.total).sum();
    assert!((yearly_total - report.total).abs() < 0.005);
}
