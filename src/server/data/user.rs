//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts. It handles account
//! creation, credential lookup for login, and refresh token rotation, converting between
//! entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParams, User, UserCredentials};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// # Arguments
    /// - `params` - Account fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            full_name: ActiveValue::Set(params.full_name),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            refresh_token: ActiveValue::Set(Some(params.refresh_token)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user and their password hash by email.
    ///
    /// # Arguments
    /// - `email` - Email address, compared exactly
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - Account found
    /// - `Ok(None)` - No account with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let password_hash = entity.password_hash.clone();
        Ok(Some(UserCredentials {
            user: User::from_entity(entity)?,
            password_hash,
        }))
    }

    /// Checks whether an account already uses the given email.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds the user currently holding a refresh token.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Token is current for this user
    /// - `Ok(None)` - Token is unknown or was rotated away
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_refresh_token(&self, refresh_token: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::RefreshToken.eq(refresh_token))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Replaces a user's refresh token, invalidating the previous one.
    ///
    /// # Returns
    /// - `Ok(())` - Token stored (or no matching user found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_refresh_token(&self, user_id: i32, refresh_token: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::RefreshToken,
                sea_orm::sea_query::Expr::value(refresh_token),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Swaps `current` for `next` only while `current` is still the stored token.
    ///
    /// # Returns
    /// - `Ok(true)` - Token rotated
    /// - `Ok(false)` - `current` was already rotated away or never matched this user
    /// - `Err(DbErr)` - Database error during update
    pub async fn rotate_refresh_token(
        &self,
        user_id: i32,
        current: &str,
        next: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::RefreshToken.eq(current))
            .col_expr(
                entity::user::Column::RefreshToken,
                sea_orm::sea_query::Expr::value(next),
            )
            .exec(self.db)
            .await?;
        Ok(result.rows_affected == 1)
    }
}
