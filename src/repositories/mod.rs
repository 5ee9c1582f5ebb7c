//! Repositorios de acceso a datos (sqlx / PostgreSQL)

pub mod customer_repository;
pub mod fillup_repository;
pub mod journey_repository;
pub mod product_repository;
pub mod region_repository;
pub mod salesman_repository;
