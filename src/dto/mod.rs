//! DTOs de la API
//!
//! Requests y responses serializables de cada recurso.

pub mod common_dto;
pub mod customer_dto;
pub mod fillup_dto;
pub mod journey_dto;
pub mod salesman_dto;
pub mod stock_dto;
