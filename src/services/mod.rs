//! Servicios de dominio
//!
//! Los tres motores del sistema: alertas de mantenimiento por vencimiento,
//! análisis de consumo de combustible y agregación de gastos. Son funciones
//! puras sobre datos ya cargados; los controllers las alimentan desde los
//! repositorios en cada request (no hay caché ni materialización).

pub mod alert_service;
pub mod expense_service;
pub mod fuel_service;

/// Redondeo a 2 decimales para presentación (distancias, costos, consumo)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Redondeo a 3 decimales (precio unitario por litro)
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
