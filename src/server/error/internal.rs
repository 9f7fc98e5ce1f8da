use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// bcrypt failed to hash or verify, or its blocking task panicked.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// jsonwebtoken failed to sign an access token.
    #[error("Failed to sign access token: {0}")]
    TokenSigning(String),

    /// CSV writer failed while building an export.
    #[error("Failed to encode CSV export: {0}")]
    CsvEncoding(String),
}
