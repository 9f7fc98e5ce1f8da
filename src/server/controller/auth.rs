use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthSessionDto, LoginDto, RefreshDto, SignupDto, TokenPairDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::SignupParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the user, signs them in, and returns the user with an access token and a
/// refresh token. The role defaults to `applicant`.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Malformed email, short password or refused role
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = AuthSessionDto),
        (status = 400, description = "Invalid signup data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, state.bcrypt_cost);

    let session = service.signup(SignupParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}

/// Sign in with email and password.
///
/// # Returns
/// - `200 OK` - Credentials matched; refresh token rotated
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = AuthSessionDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, state.bcrypt_cost);

    let session = service.login(&payload.email, &payload.password).await?;

    Ok(Json(session.into_dto()))
}

/// Exchange a refresh token for a new token pair.
///
/// # Returns
/// - `200 OK` - New access and refresh tokens
/// - `401 Unauthorized` - Refresh token unknown or already used
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/auth/refresh",
    tag = AUTH_TAG,
    request_body = RefreshDto,
    responses(
        (status = 200, description = "Tokens refreshed", body = TokenPairDto),
        (status = 401, description = "Invalid refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, state.bcrypt_cost);

    let pair = service.refresh(&payload.refresh_token).await?;

    Ok(Json(pair.into_dto()))
}

/// Get the authenticated user.
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Missing, invalid or expired token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok(Json(user.into_dto()))
}
