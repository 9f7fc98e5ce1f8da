use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::user::SignupParams,
        service::auth::{token::TokenService, AuthService},
    },
};
use test_utils::builder::TestBuilder;


/// Lowest cost bcrypt accepts.
const FAST_BCRYPT_COST: u32 = 4;

fn tokens() -> TokenService {
    TokenService::new("test-secret", chrono::Duration::minutes(15))
}

fn signup_params(email: &str) -> SignupParams {
    SignupParams {
        email: email.to_string(),
        password: "correct horse".to_string(),
        full_name: Some("Dana Reyes".to_string()),
        role: None,
    }
}
