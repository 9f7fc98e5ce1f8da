//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Status columns are parsed into typed enums here, and each status enum's transition
//! table lives next to the model that owns it.

pub mod application;
pub mod document;
pub mod interview;
pub mod job;
pub mod lifecycle;
pub mod notification;
pub mod report;
pub mod user;

use sea_orm::DbErr;
use std::str::FromStr;

/// Parses a stored enum column, converting failures into `DbErr::Custom`.
pub(crate) fn parse_column<T>(value: &str) -> Result<T, DbErr>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse stored value: {}", e)))
}
