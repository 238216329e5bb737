//! Analizador de consumo de combustible
//!
//! Encadena lecturas de odómetro consecutivas por vehículo para derivar la
//! distancia y el consumo de cada "viaje" entre abastecimientos, más los
//! totales de flota. Las anomalías de datos (odómetro que no crece) quedan
//! como valores nulos que no aportan a los totales, nunca como error.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::fueling::FuelingEvent;
use crate::services::{round2, round3};

/// Detalle de un abastecimiento con sus métricas derivadas
#[derive(Debug, Clone, Serialize)]
pub struct FuelTrip {
    pub event_id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_plate: String,
    pub fueled_at: DateTime<Utc>,
    pub odometer: i64,
    pub liters: f64,
    pub price_per_liter: f64,
    pub total_cost: f64,
    pub station: Option<String>,
    /// Kilómetros desde el abastecimiento anterior del mismo vehículo
    pub distance: Option<f64>,
    /// km por litro del tramo
    pub consumption: Option<f64>,
}

/// Totales de flota sobre el conjunto filtrado
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FuelSummary {
    pub total_cost: f64,
    pub total_liters: f64,
    pub total_distance: f64,
    pub average_consumption: Option<f64>,
    pub cost_per_km: Option<f64>,
    pub average_price_per_liter: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FuelReport {
    pub trips: Vec<FuelTrip>,
    pub summary: FuelSummary,
}

/// Analizar un conjunto de abastecimientos ya filtrado.
///
/// El cómputo recorre los eventos en orden ascendente por
/// `(vehicle_id, fueled_at, odometer)`; la lista devuelta se reordena del
/// más reciente al más antiguo para presentación.
pub fn analyze(mut events: Vec<FuelingEvent>) -> FuelReport {
    events.sort_by(|a, b| {
        a.vehicle_id
            .cmp(&b.vehicle_id)
            .then_with(|| a.fueled_at.cmp(&b.fueled_at))
            .then_with(|| a.odometer.cmp(&b.odometer))
    });

    let mut last_odometer: HashMap<Uuid, i64> = HashMap::new();
    let mut total_cost = 0.0;
    let mut total_liters = 0.0;
    let mut total_distance: i64 = 0;

    let mut trips = Vec::with_capacity(events.len());
    for event in events {
        let distance = match last_odometer.get(&event.vehicle_id) {
            Some(&previous) if event.odometer > previous => Some(event.odometer - previous),
            // Sin lectura previa, o lectura que no avanza: tramo indefinido
            _ => None,
        };
        last_odometer.insert(event.vehicle_id, event.odometer);

        let consumption = match distance {
            Some(d) if event.liters > 0.0 => Some(round2(d as f64 / event.liters)),
            _ => None,
        };

        total_cost += event.total_cost;
        total_liters += event.liters;
        if let Some(d) = distance {
            total_distance += d;
        }

        trips.push(FuelTrip {
            event_id: event.id,
            vehicle_id: event.vehicle_id,
            vehicle_plate: event.vehicle_plate,
            fueled_at: event.fueled_at,
            odometer: event.odometer,
            liters: event.liters,
            price_per_liter: event.price_per_liter,
            total_cost: event.total_cost,
            station: event.station,
            distance: distance.map(|d| d as f64),
            consumption,
        });
    }

    trips.sort_by(|a, b| b.fueled_at.cmp(&a.fueled_at));

    let summary = FuelSummary {
        total_cost: round2(total_cost),
        total_liters: round2(total_liters),
        total_distance: round2(total_distance as f64),
        average_consumption: (total_liters > 0.0)
            .then(|| round2(total_distance as f64 / total_liters)),
        cost_per_km: (total_distance > 0)
            .then(|| round2(total_cost / total_distance as f64)),
        average_price_per_liter: (total_liters > 0.0)
            .then(|| round3(total_cost / total_liters)),
    };

    FuelReport { trips, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(vehicle_id: Uuid, day: u32, odometer: i64, liters: f64) -> FuelingEvent {
        FuelingEvent {
            id: Uuid::new_v4(),
            vehicle_id,
            vehicle_plate: "ABC1234".to_string(),
            fueled_at: Utc.with_ymd_and_hms(2024, 3, day, 10, 0, 0).unwrap(),
            odometer,
            liters,
            price_per_liter: 5.0,
            total_cost: liters * 5.0,
            station: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_trip_chaining_with_odometer_anomaly() {
        let v = Uuid::new_v4();
        let events = vec![
            event(v, 1, 1000, 40.0),
            event(v, 2, 1400, 35.0),
            event(v, 3, 1390, 30.0),
            event(v, 4, 1800, 38.0),
        ];

        let report = analyze(events);
        // La lista sale del más reciente al más antiguo
        let by_date: Vec<_> = report.trips.iter().rev().collect();

        assert_eq!(by_date[0].distance, None);
        assert_eq!(by_date[1].distance, Some(400.0));
        assert_eq!(by_date[1].consumption, Some(round2(400.0 / 35.0)));
        // Lectura que retrocede: nulo, pero pasa a ser la nueva base
        assert_eq!(by_date[2].distance, None);
        assert_eq!(by_date[2].consumption, None);
        assert_eq!(by_date[3].distance, Some(410.0));
        assert_eq!(by_date[3].consumption, Some(round2(410.0 / 38.0)));

        assert_eq!(report.summary.total_distance, 810.0);
    }

    #[test]
    fn test_vehicles_chain_independently() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let events = vec![
            event(a, 1, 1000, 40.0),
            event(b, 1, 500, 20.0),
            event(a, 2, 1200, 20.0),
            event(b, 2, 600, 10.0),
        ];

        let report = analyze(events);
        let distances: f64 = report.trips.iter().filter_map(|t| t.distance).sum();
        assert_eq!(distances, 300.0);
        assert_eq!(report.summary.total_distance, 300.0);
    }

    #[test]
    fn test_equal_reading_does_not_count_as_trip() {
        let v = Uuid::new_v4();
        let events = vec![event(v, 1, 1000, 40.0), event(v, 2, 1000, 30.0)];

        let report = analyze(events);
        assert!(report.trips.iter().all(|t| t.distance.is_none()));
        assert_eq!(report.summary.total_distance, 0.0);
        assert_eq!(report.summary.cost_per_km, None);
    }

    #[test]
    fn test_summary_ratios() {
        let v = Uuid::new_v4();
        let events = vec![event(v, 1, 1000, 40.0), event(v, 2, 1400, 35.0)];

        let report = analyze(events);
        let s = &report.summary;
        assert_eq!(s.total_liters, 75.0);
        assert_eq!(s.total_cost, 375.0);
        assert_eq!(s.total_distance, 400.0);
        assert_eq!(s.average_consumption, Some(round2(400.0 / 75.0)));
        assert_eq!(s.cost_per_km, Some(round2(375.0 / 400.0)));
        assert_eq!(s.average_price_per_liter, Some(5.0));
    }

    #[test]
    fn test_empty_input() {
        let report = analyze(Vec::new());
        assert!(report.trips.is_empty());
        assert_eq!(report.summary.total_cost, 0.0);
        assert_eq!(report.summary.average_consumption, None);
        assert_eq!(report.summary.average_price_per_liter, None);
    }

    #[test]
    fn test_detail_list_is_newest_first() {
        let v = Uuid::new_v4();
        let events = vec![event(v, 1, 1000, 40.0), event(v, 5, 1500, 35.0)];

        let report = analyze(events);
        assert!(report.trips[0].fueled_at > report.trips[1].fueled_at);
    }
}
