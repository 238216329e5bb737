//! Motor de alertas de mantenimiento
//!
//! Clasifica el estado de cambio de aceite y checklist de cada vehículo a
//! partir del snapshot, arma la lista ordenada de "próximos mantenimientos"
//! y los contadores del dashboard. Todas las comparaciones de fecha usan la
//! medianoche UTC como inicio del día.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;

/// Ventana de aviso anticipado para checklists
const DUE_SOON_WINDOW_DAYS: i64 = 3;

/// Estado de un ítem de mantenimiento
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    OverdueDateAndOdometer,
    OverdueOdometer,
    OverdueDate,
    DueSoon,
    Ok,
}

impl AlertStatus {
    pub fn is_overdue(self) -> bool {
        matches!(
            self,
            AlertStatus::OverdueDateAndOdometer
                | AlertStatus::OverdueOdometer
                | AlertStatus::OverdueDate
        )
    }

    /// Prioridad de ordenamiento: vencidos, luego por vencer, luego futuros
    fn priority(self) -> u8 {
        if self.is_overdue() {
            0
        } else if self == AlertStatus::DueSoon {
            1
        } else {
            2
        }
    }
}

/// Ítem al que refiere una alerta
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertItem {
    OilChange,
    Checklist,
}

/// Entrada de la vista de "próximos mantenimientos"
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceAlert {
    pub vehicle_id: Uuid,
    pub plate: String,
    pub item: AlertItem,
    pub status: AlertStatus,
    pub due_date: Option<DateTime<Utc>>,
    pub due_odometer: Option<i64>,
    pub odometer_current: i64,
}

/// Contadores agregados para el dashboard: un vehículo aporta a lo sumo a
/// uno de los dos, con precedencia de lo vencido sobre lo agendado.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AlertCounts {
    pub alerts_active: i64,
    pub scheduled_maintenance: i64,
}

/// Clasificar el estado del cambio de aceite de un vehículo
pub fn classify_oil(vehicle: &Vehicle, today: NaiveDate) -> AlertStatus {
    let overdue_by_odometer = vehicle
        .next_oil_change_odometer
        .is_some_and(|next| vehicle.odometer_current >= next);
    let overdue_by_date = vehicle
        .next_oil_change_date
        .is_some_and(|next| next.date_naive() < today);

    match (overdue_by_odometer, overdue_by_date) {
        (true, true) => AlertStatus::OverdueDateAndOdometer,
        (true, false) => AlertStatus::OverdueOdometer,
        (false, true) => AlertStatus::OverdueDate,
        (false, false) => AlertStatus::Ok,
    }
}

/// Clasificar el estado del checklist de un vehículo
pub fn classify_checklist(vehicle: &Vehicle, today: NaiveDate) -> AlertStatus {
    match vehicle.next_checklist_date {
        Some(next) => {
            let due = next.date_naive();
            if due < today {
                AlertStatus::OverdueDate
            } else if due <= today + Duration::days(DUE_SOON_WINDOW_DAYS) {
                AlertStatus::DueSoon
            } else {
                AlertStatus::Ok
            }
        }
        None => AlertStatus::Ok,
    }
}

fn is_today_or_future(date: Option<DateTime<Utc>>, today: NaiveDate) -> bool {
    date.is_some_and(|d| d.date_naive() >= today)
}

/// Armar la lista combinada de próximos mantenimientos de toda la flota.
///
/// Incluye ítems vencidos y también los agendados a hoy o futuro; ordena
/// por prioridad y dentro de cada prioridad por fecha ascendente (los ítems
/// sin fecha van al final). El orden es estable, por lo que corridas
/// repetidas sobre los mismos datos producen el mismo resultado.
pub fn build_schedule(vehicles: &[Vehicle], today: NaiveDate) -> Vec<MaintenanceAlert> {
    let mut alerts = Vec::new();

    for vehicle in vehicles {
        let oil = classify_oil(vehicle, today);
        if oil != AlertStatus::Ok || is_today_or_future(vehicle.next_oil_change_date, today) {
            alerts.push(MaintenanceAlert {
                vehicle_id: vehicle.id,
                plate: vehicle.plate.clone(),
                item: AlertItem::OilChange,
                status: oil,
                due_date: vehicle.next_oil_change_date,
                due_odometer: vehicle.next_oil_change_odometer,
                odometer_current: vehicle.odometer_current,
            });
        }

        let checklist = classify_checklist(vehicle, today);
        if checklist != AlertStatus::Ok || is_today_or_future(vehicle.next_checklist_date, today) {
            alerts.push(MaintenanceAlert {
                vehicle_id: vehicle.id,
                plate: vehicle.plate.clone(),
                item: AlertItem::Checklist,
                status: checklist,
                due_date: vehicle.next_checklist_date,
                due_odometer: None,
                odometer_current: vehicle.odometer_current,
            });
        }
    }

    alerts.sort_by(|a, b| {
        a.status
            .priority()
            .cmp(&b.status.priority())
            .then_with(|| match (a.due_date, b.due_date) {
                (Some(da), Some(db)) => da.cmp(&db),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            })
    });

    alerts
}

/// Contar vehículos con alertas activas vs. mantenimiento agendado.
///
/// Cualquier condición vencida cuenta como alerta activa; solo si nada está
/// vencido y existe una fecha a hoy o futuro el vehículo cuenta como
/// agendado.
pub fn summarize(vehicles: &[Vehicle], today: NaiveDate) -> AlertCounts {
    let mut counts = AlertCounts {
        alerts_active: 0,
        scheduled_maintenance: 0,
    };

    for vehicle in vehicles {
        let oil = classify_oil(vehicle, today);
        let checklist = classify_checklist(vehicle, today);

        if oil.is_overdue() || checklist.is_overdue() {
            counts.alerts_active += 1;
        } else if is_today_or_future(vehicle.next_oil_change_date, today)
            || is_today_or_future(vehicle.next_checklist_date, today)
        {
            counts.scheduled_maintenance += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn vehicle(plate: &str) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            plate: plate.to_string(),
            make: "Fiat".to_string(),
            model: "Strada".to_string(),
            manufacture_year: 2020,
            model_year: 2021,
            color: None,
            chassis: None,
            registration_number: None,
            odometer_current: 50_000,
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

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_oil_ok_without_thresholds() {
        assert_eq!(classify_oil(&vehicle("AAA1111"), today()), AlertStatus::Ok);
    }

    #[test]
    fn test_oil_overdue_by_odometer_only() {
        let mut v = vehicle("AAA1111");
        v.next_oil_change_odometer = Some(50_000);
        assert_eq!(classify_oil(&v, today()), AlertStatus::OverdueOdometer);
    }

    #[test]
    fn test_oil_overdue_by_date_only() {
        let mut v = vehicle("AAA1111");
        v.next_oil_change_date = Some(date(2024, 6, 14));
        assert_eq!(classify_oil(&v, today()), AlertStatus::OverdueDate);
    }

    #[test]
    fn test_oil_overdue_by_both() {
        let mut v = vehicle("AAA1111");
        v.next_oil_change_odometer = Some(40_000);
        v.next_oil_change_date = Some(date(2024, 1, 1));
        assert_eq!(classify_oil(&v, today()), AlertStatus::OverdueDateAndOdometer);
    }

    #[test]
    fn test_oil_due_today_is_not_overdue() {
        // La fecha de hoy no está vencida: el corte es medianoche UTC
        let mut v = vehicle("AAA1111");
        v.next_oil_change_date = Some(date(2024, 6, 15));
        assert_eq!(classify_oil(&v, today()), AlertStatus::Ok);
    }

    #[test]
    fn test_checklist_window() {
        let mut v = vehicle("AAA1111");

        v.next_checklist_date = Some(date(2024, 6, 14));
        assert_eq!(classify_checklist(&v, today()), AlertStatus::OverdueDate);

        v.next_checklist_date = Some(date(2024, 6, 15));
        assert_eq!(classify_checklist(&v, today()), AlertStatus::DueSoon);

        v.next_checklist_date = Some(date(2024, 6, 18));
        assert_eq!(classify_checklist(&v, today()), AlertStatus::DueSoon);

        v.next_checklist_date = Some(date(2024, 6, 19));
        assert_eq!(classify_checklist(&v, today()), AlertStatus::Ok);
    }

    #[test]
    fn test_schedule_includes_upcoming_and_orders_overdue_first() {
        let mut overdue = vehicle("BBB2222");
        overdue.next_oil_change_date = Some(date(2024, 6, 1));

        let mut upcoming = vehicle("CCC3333");
        upcoming.next_oil_change_date = Some(date(2024, 7, 1));

        let mut due_soon = vehicle("DDD4444");
        due_soon.next_checklist_date = Some(date(2024, 6, 16));

        let ok = vehicle("EEE5555");

        let schedule = build_schedule(
            &[upcoming.clone(), ok, due_soon.clone(), overdue.clone()],
            today(),
        );

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule[0].plate, "BBB2222");
        assert_eq!(schedule[0].status, AlertStatus::OverdueDate);
        assert_eq!(schedule[1].plate, "DDD4444");
        assert_eq!(schedule[1].status, AlertStatus::DueSoon);
        assert_eq!(schedule[2].plate, "CCC3333");
        assert_eq!(schedule[2].status, AlertStatus::Ok);
    }

    #[test]
    fn test_schedule_dateless_overdue_sorts_after_dated_overdue() {
        let mut by_odometer = vehicle("FFF6666");
        by_odometer.next_oil_change_odometer = Some(10_000);

        let mut by_date = vehicle("GGG7777");
        by_date.next_oil_change_date = Some(date(2024, 5, 1));

        let schedule = build_schedule(&[by_odometer, by_date], today());
        assert_eq!(schedule[0].plate, "GGG7777");
        assert_eq!(schedule[1].plate, "FFF6666");
        assert_eq!(schedule[1].due_date, None);
    }

    #[test]
    fn test_overdue_vehicle_counts_as_alert_not_scheduled() {
        // Aceite vencido + checklist futuro: cuenta una sola vez, como alerta
        let mut v = vehicle("HHH8888");
        v.next_oil_change_odometer = Some(45_000);
        v.next_checklist_date = Some(date(2024, 8, 1));

        let counts = summarize(&[v], today());
        assert_eq!(counts.alerts_active, 1);
        assert_eq!(counts.scheduled_maintenance, 0);
    }

    #[test]
    fn test_scheduled_only_counts_future() {
        let mut scheduled = vehicle("III9999");
        scheduled.next_oil_change_date = Some(date(2024, 9, 1));

        let idle = vehicle("JJJ0000");

        let counts = summarize(&[scheduled, idle], today());
        assert_eq!(counts.alerts_active, 0);
        assert_eq!(counts.scheduled_maintenance, 1);
    }
}
