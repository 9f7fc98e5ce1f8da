//! Data transfer objects exchanged over the HTTP API.
//!
//! The types here are serialized to and from JSON request and response bodies (camelCase)
//! and documented in the generated OpenAPI schema. Server-side domain models convert into
//! these at the controller boundary.

#[macro_use]
mod macros;

pub mod api;
pub mod application;
pub mod auth;
pub mod document;
pub mod interview;
pub mod job;
pub mod notification;
pub mod report;
pub mod user;
