//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. Every field is cheap to clone: `DatabaseConnection` is a
//! pool handle and `TokenService` holds reference-counted keys.

use sea_orm::DatabaseConnection;

use crate::server::{config::Environment, service::auth::token::TokenService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and validates access tokens.
    pub tokens: TokenService,

    /// Cost factor for hashing new passwords.
    pub bcrypt_cost: u32,

    pub environment: Environment,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        bcrypt_cost: u32,
        environment: Environment,
    ) -> Self {
        Self {
            db,
            tokens,
            bcrypt_cost,
            environment,
        }
    }
}
