use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::error::SignupError;
use crate::model::{NewUser, User};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsersError {
    #[error("An account with email {0} already exists")]
    EmailTaken(String),

    #[error("{0}")]
    Validation(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<SignupError> for UsersError {
    fn from(err: SignupError) -> Self {
        match err {
            SignupError::Validation(msg) => UsersError::Validation(msg),
            other => UsersError::Storage(other.to_string()),
        }
    }
}

pub type UsersResult<T> = std::result::Result<T, UsersError>;

/// User-management collaborator behind the `register` mutation.
///
/// Implementations own password hashing, persistence and activation-token
/// issuance; the GraphQL layer only shapes their results.
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Creates an account and returns its activation token.
    async fn register(&self, new_user: NewUser) -> UsersResult<String>;

    async fn find_by_id(&self, id: &str) -> UsersResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> UsersResult<Option<User>>;
}

pub type DynUsersService = Arc<dyn UsersService>;
