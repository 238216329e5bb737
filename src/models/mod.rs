//! Modelos de datos del sistema
//!
//! Structs que mapean a las tablas de PostgreSQL.

pub mod checklist;
pub mod fine;
pub mod fueling;
pub mod maintenance;
pub mod vehicle;
