//! Backend de mantenimiento de flota
//!
//! Registra vehículos y sus eventos (mantenimientos, checklists,
//! abastecimientos y multas) y deriva alertas de vencimiento, consumo de
//! combustible y reportes de gastos. Expuesto como librería para que los
//! tests de integración ejerciten los motores de cálculo directamente.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
