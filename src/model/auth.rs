use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::{Role, UserDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupDto {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    /// Defaults to `applicant`; `super_admin` cannot be self-assigned.
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshDto {
    pub refresh_token: String,
}

/// Returned by signup and login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthSessionDto {
    pub user: UserDto,
    pub token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairDto {
    pub token: String,
    pub refresh_token: String,
}
