//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert DTOs into domain
//! parameters, call a service, and convert the result back into a DTO. Every handler
//! carries a `utoipa::path` annotation so the router can assemble the OpenAPI document.

pub mod application;
pub mod auth;
pub mod document;
pub mod health;
pub mod interview;
pub mod job;
pub mod notification;
pub mod report;
