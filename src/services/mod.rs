//! Services module
//!
//! Este módulo contiene la lógica de negocio pura de planificación:
//! construcción de rutas y agregación del ledger de stock.

pub mod route_builder;
pub mod stock_ledger;

pub use route_builder::RouteBuilder;
