//! SeaORM entity models for the hireflow database schema.

pub mod prelude;

pub mod document;
pub mod interview;
pub mod job;
pub mod job_application;
pub mod notification;
pub mod user;
