//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, and the
//! helpers module builds whole dependency chains when a test doesn't care about them.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let job = factory::job::create_job(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (hr, applicant, job, application) =
//!         factory::helpers::create_application_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let recruiter = factory::user::UserFactory::new(&db)
//!     .email("recruiter@example.com")
//!     .role("recruiter")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `job` - Create job postings
//! - `job_application` - Create applications against a job
//! - `document` - Create uploaded documents
//! - `interview` - Create interviews for an application
//! - `notification` - Create notifications for a user
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod document;
pub mod helpers;
pub mod interview;
pub mod job;
pub mod job_application;
pub mod notification;
pub mod user;

pub use document::create_document;
pub use interview::create_interview;
pub use job::create_job;
pub use job_application::create_application;
pub use notification::create_notification;
pub use user::{create_user, create_user_with_role};
