//! Agregador de gastos
//!
//! Fusiona los costos de mantenimientos, abastecimientos y multas pagadas en
//! un libro mayor plano filtrado por período, más el desglose mensual por
//! categoría para los gráficos. Los montos ausentes o no positivos se
//! excluyen tanto del libro como de los totales.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::services::round2;

/// Categoría del gasto
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Maintenance,
    Fueling,
    Fine,
}

/// Candidato a entrada del libro, tal como sale de cada colección.
/// El monto y la fecha pueden faltar en registros incompletos.
#[derive(Debug, Clone)]
pub struct ExpenseSource {
    pub category: ExpenseCategory,
    pub vehicle_id: Uuid,
    pub vehicle_plate: String,
    pub description: String,
    pub amount: Option<f64>,
    pub date: Option<DateTime<Utc>>,
}

/// Entrada del libro mayor combinado
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseEntry {
    pub category: ExpenseCategory,
    pub vehicle_id: Uuid,
    pub vehicle_plate: String,
    pub description: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpenseReport {
    pub entries: Vec<ExpenseEntry>,
    pub total: f64,
}

/// Fila del desglose mensual (12 por año)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyExpenseRow {
    pub month: u32,
    pub maintenance: f64,
    pub fueling: f64,
    pub fines: f64,
    pub total: f64,
}

/// Construir el libro mayor combinado a partir de las tres fuentes.
///
/// Descarta registros sin fecha o sin monto positivo y ordena del más
/// reciente al más antiguo. El total siempre coincide con la suma de las
/// entradas visibles.
pub fn build_ledger(sources: Vec<ExpenseSource>) -> ExpenseReport {
    let mut entries: Vec<ExpenseEntry> = sources
        .into_iter()
        .filter_map(|source| {
            let amount = source.amount.filter(|a| *a > 0.0)?;
            let date = source.date?;
            Some(ExpenseEntry {
                category: source.category,
                vehicle_id: source.vehicle_id,
                vehicle_plate: source.vehicle_plate,
                description: source.description,
                amount,
                date,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.date.cmp(&a.date));
    let total = round2(entries.iter().map(|e| e.amount).sum());

    ExpenseReport { entries, total }
}

/// Agrupar las entradas de un año en 12 cubetas mensuales por categoría
pub fn monthly_breakdown(entries: &[ExpenseEntry], year: i32) -> Vec<MonthlyExpenseRow> {
    let mut rows: Vec<MonthlyExpenseRow> = (1..=12)
        .map(|month| MonthlyExpenseRow {
            month,
            maintenance: 0.0,
            fueling: 0.0,
            fines: 0.0,
            total: 0.0,
        })
        .collect();

    for entry in entries {
        if entry.date.year() != year {
            continue;
        }
        let row = &mut rows[entry.date.month() as usize - 1];
        match entry.category {
            ExpenseCategory::Maintenance => row.maintenance += entry.amount,
            ExpenseCategory::Fueling => row.fueling += entry.amount,
            ExpenseCategory::Fine => row.fines += entry.amount,
        }
    }

    for row in &mut rows {
        row.maintenance = round2(row.maintenance);
        row.fueling = round2(row.fueling);
        row.fines = round2(row.fines);
        row.total = round2(row.maintenance + row.fueling + row.fines);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn source(
        category: ExpenseCategory,
        amount: Option<f64>,
        month: u32,
        day: u32,
    ) -> ExpenseSource {
        ExpenseSource {
            category,
            vehicle_id: Uuid::new_v4(),
            vehicle_plate: "ABC1234".to_string(),
            description: "gasto".to_string(),
            amount,
            date: Some(Utc.with_ymd_and_hms(2024, month, day, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_ledger_total_matches_entries() {
        let report = build_ledger(vec![
            source(ExpenseCategory::Maintenance, Some(150.0), 1, 10),
            source(ExpenseCategory::Fueling, Some(320.55), 2, 5),
            source(ExpenseCategory::Fine, Some(88.2), 3, 1),
        ]);

        let sum: f64 = report.entries.iter().map(|e| e.amount).sum();
        assert_eq!(report.total, round2(sum));
        assert_eq!(report.total, 558.75);
    }

    #[test]
    fn test_ledger_excludes_non_positive_and_missing_amounts() {
        let report = build_ledger(vec![
            source(ExpenseCategory::Maintenance, Some(100.0), 1, 10),
            source(ExpenseCategory::Maintenance, Some(0.0), 1, 11),
            source(ExpenseCategory::Maintenance, Some(-5.0), 1, 12),
            source(ExpenseCategory::Maintenance, None, 1, 13),
        ]);

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.total, 100.0);
    }

    #[test]
    fn test_ledger_is_newest_first() {
        let report = build_ledger(vec![
            source(ExpenseCategory::Fueling, Some(10.0), 1, 1),
            source(ExpenseCategory::Fueling, Some(20.0), 3, 1),
            source(ExpenseCategory::Fueling, Some(30.0), 2, 1),
        ]);

        let amounts: Vec<f64> = report.entries.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![20.0, 30.0, 10.0]);
    }

    #[test]
    fn test_ledger_skips_dateless_entries() {
        let mut dateless = source(ExpenseCategory::Fine, Some(50.0), 1, 1);
        dateless.date = None;

        let report = build_ledger(vec![dateless]);
        assert!(report.entries.is_empty());
        assert_eq!(report.total, 0.0);
    }

    #[test]
    fn test_monthly_breakdown_buckets_by_category() {
        let report = build_ledger(vec![
            source(ExpenseCategory::Maintenance, Some(100.0), 1, 5),
            source(ExpenseCategory::Fueling, Some(200.0), 1, 20),
            source(ExpenseCategory::Fine, Some(50.0), 2, 3),
            source(ExpenseCategory::Fueling, Some(75.5), 12, 31),
        ]);

        let rows = monthly_breakdown(&report.entries, 2024);
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].maintenance, 100.0);
        assert_eq!(rows[0].fueling, 200.0);
        assert_eq!(rows[0].total, 300.0);
        assert_eq!(rows[1].fines, 50.0);
        assert_eq!(rows[11].fueling, 75.5);
        assert_eq!(rows[5].total, 0.0);
    }

    #[test]
    fn test_monthly_breakdown_ignores_other_years() {
        let report = build_ledger(vec![source(ExpenseCategory::Fueling, Some(99.0), 4, 1)]);
        let rows = monthly_breakdown(&report.entries, 2023);
        assert!(rows.iter().all(|r| r.total == 0.0));
    }
}
