//! Controllers MVC
//!
//! Validan los requests, orquestan repositorios y motores, y arman las
//! respuestas de la API.

pub mod checklist_controller;
pub mod dashboard_controller;
pub mod fine_controller;
pub mod fueling_controller;
pub mod maintenance_controller;
pub mod report_controller;
pub mod vehicle_controller;
