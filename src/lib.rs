//! Backend de gestión de ventas en campo
//!
//! Núcleo de planificación de tours y stock de campo: elegibilidad de
//! vendedores, construcción de rutas de visita, creación de tours en
//! batch con deduplicación, derivación del estado de journey, fillups y
//! ledger agregado de stock.

pub mod cache;
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
