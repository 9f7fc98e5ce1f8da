//! User domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::user::{Role, UserDto},
    server::model::parse_column,
};

/// User account without credential material.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The user entity from the database
    ///
    /// # Returns
    /// - `Ok(User)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            role: parse_column(&entity.role)?,
            email: entity.email,
            full_name: entity.full_name,
            created_at: entity.created_at,
        })
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// A user together with their stored password hash, used only during login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Parameters for inserting a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub role: Role,
    pub refresh_token: String,
}

/// Parameters for a signup request before hashing.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub role: Option<Role>,
}

impl SignupParams {
    pub fn from_dto(dto: crate::model::auth::SignupDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            full_name: dto.full_name,
            role: dto.role,
        }
    }
}

/// Issued credentials returned by signup and login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
    pub refresh_token: String,
}

impl AuthSession {
    pub fn into_dto(self) -> crate::model::auth::AuthSessionDto {
        crate::model::auth::AuthSessionDto {
            user: self.user.into_dto(),
            token: self.token,
            refresh_token: self.refresh_token,
        }
    }
}
