//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, ownership checks and status-machine enforcement
//! - **Orchestration**: Coordinating repository calls and sending notifications
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-row updates inside one transaction

pub mod application;
pub mod auth;
pub mod document;
pub mod interview;
pub mod job;
pub mod notification;
pub mod report;

#[cfg(test)]
mod test;
