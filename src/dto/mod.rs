//! DTOs de la API
//!
//! Requests validados con `validator` y responses serializables.

pub mod checklist_dto;
pub mod common;
pub mod dashboard_dto;
pub mod fine_dto;
pub mod fueling_dto;
pub mod maintenance_dto;
pub mod report_dto;
pub mod vehicle_dto;
