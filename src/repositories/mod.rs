//! Repositorios de acceso a datos
//!
//! Un repositorio por agregado. Las secuencias evento + snapshot y el
//! borrado en cascada se ejecutan como transacciones únicas.

pub mod checklist_repository;
pub mod fine_repository;
pub mod fueling_repository;
pub mod maintenance_repository;
pub mod vehicle_repository;
