//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL, más la lógica pura de dominio que opera sobre
//! ellos (elegibilidad, estado de journey).

pub mod customer;
pub mod fillup;
pub mod journey;
pub mod product;
pub mod region;
pub mod salesman;
pub mod stock;
