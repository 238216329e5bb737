//! Routers de la API REST

pub mod checklist_routes;
pub mod dashboard_routes;
pub mod fine_routes;
pub mod fueling_routes;
pub mod maintenance_routes;
pub mod report_routes;
pub mod vehicle_routes;
