//! Account signup, login and token refresh.
//!
//! `AuthService` validates credentials, hashes and verifies passwords, and hands out an
//! access token plus a rotating refresh token on every successful signup, login or refresh.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{AuthSession, CreateUserParams, SignupParams},
        service::auth::{
            password::{hash_password, verify_password, MIN_PASSWORD_LENGTH},
            token::{generate_refresh_token, TokenService},
        },
    },
};

/// Access token and its paired refresh token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPair {
    pub token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn into_dto(self) -> crate::model::auth::TokenPairDto {
        crate::model::auth::TokenPairDto {
            token: self.token,
            refresh_token: self.refresh_token,
        }
    }
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Access token signer
    /// - `bcrypt_cost` - Cost factor for hashing new passwords
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, bcrypt_cost: u32) -> Self {
        Self {
            db,
            tokens,
            bcrypt_cost,
        }
    }

    /// Registers a new account and signs it in.
    ///
    /// Role defaults to `applicant`; `super_admin` can't be self-assigned.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Created user with fresh tokens
    /// - `Err(AppError::BadRequest)` - Email malformed, password too short or role refused
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn signup(&self, params: SignupParams) -> Result<AuthSession, AppError> {
        let email = params.email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::BadRequest("A valid email is required".to_string()));
        }
        if params.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        let role = params.role.unwrap_or(Role::Applicant);
        if role == Role::SuperAdmin {
            return Err(AppError::BadRequest(
                "The super_admin role cannot be requested at signup".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);
        if repo.email_exists(&email).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let password_hash = hash_password(&params.password, self.bcrypt_cost).await?;
        let refresh_token = generate_refresh_token();
        let user = repo
            .create(CreateUserParams {
                email,
                password_hash,
                full_name: params.full_name.filter(|n| !n.trim().is_empty()),
                role,
                refresh_token: refresh_token.clone(),
            })
            .await?;

        tracing::info!("Registered user {} with role {}", user.id, user.role);

        let token = self.tokens.issue(&user)?;
        Ok(AuthSession {
            user,
            token,
            refresh_token,
        })
    }

    /// Signs in with email and password, rotating the refresh token.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Credentials matched
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let repo = UserRepository::new(self.db);
        let email = email.trim().to_lowercase();

        let Some(credentials) = repo.find_credentials_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };
        if !verify_password(password, &credentials.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = credentials.user;
        let refresh_token = generate_refresh_token();
        repo.set_refresh_token(user.id, &refresh_token).await?;

        let token = self.tokens.issue(&user)?;
        Ok(AuthSession {
            user,
            token,
            refresh_token,
        })
    }

    /// Exchanges a current refresh token for a new token pair.
    ///
    /// The presented refresh token stops working once this returns.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - New access and refresh tokens
    /// - `Err(AuthError::InvalidRefreshToken)` - Token unknown or already rotated
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_refresh_token(refresh_token).await? else {
            return Err(AuthError::InvalidRefreshToken.into());
        };

        let next_refresh_token = generate_refresh_token();
        if !repo
            .rotate_refresh_token(user.id, refresh_token, &next_refresh_token)
            .await?
        {
            return Err(AuthError::InvalidRefreshToken.into());
        }

        Ok(TokenPair {
            token: self.tokens.issue(&user)?,
            refresh_token: next_refresh_token,
        })
    }
}
