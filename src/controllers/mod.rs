//! Controllers
//!
//! Orquestación de negocio por recurso: validación local, repositorios
//! y cache.

pub mod customer_controller;
pub mod fillup_controller;
pub mod journey_controller;
pub mod salesman_controller;
pub mod stock_controller;
