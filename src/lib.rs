//! Hireflow applicant-tracking backend.
//!
//! `model` holds the DTOs and value enums shared by the HTTP surface, `server` holds the
//! Axum application: controllers, services, repositories and infrastructure.

pub mod model;
pub mod server;
