//! Middleware del sistema

pub mod cors;
