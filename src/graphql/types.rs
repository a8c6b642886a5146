use crate::model::{NewUser, User as ModelUser};
use crate::users::{UsersError, UsersResult};
use crate::validation;
use async_graphql::{CustomValidator, Enum, ID, InputObject, InputValueError, SimpleObject};

#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(rename_fields = "snake_case")]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub phone_number: i64,
    pub activated: bool,
    pub created_at: String,
}

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        Self {
            id: ID(u.id),
            name: u.name,
            email: u.email,
            phone_number: u.phone_number,
            activated: u.activated,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}

pub struct NameValidator;

impl CustomValidator<String> for NameValidator {
    fn check(&self, value: &String) -> Result<(), InputValueError<String>> {
        validation::validate_name(value).map_err(|e| InputValueError::custom(e))
    }
}

pub struct PasswordValidator;

impl CustomValidator<String> for PasswordValidator {
    fn check(&self, value: &String) -> Result<(), InputValueError<String>> {
        validation::validate_password(value).map_err(|e| InputValueError::custom(e))
    }
}

/// Arguments of the `register` mutation. Every field is required and
/// checked before the resolver runs.
#[derive(InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct RegisterInput {
    #[graphql(validator(custom = "NameValidator"))]
    pub name: String,

    #[graphql(validator(email, max_length = 254))]
    pub email: String,

    #[graphql(secret, validator(custom = "PasswordValidator"))]
    pub password: String,

    #[graphql(validator(minimum = 1))]
    pub phone_number: i64,
}

impl From<RegisterInput> for NewUser {
    fn from(input: RegisterInput) -> Self {
        NewUser::new(input.name, input.email, input.password, input.phone_number)
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum RegisterErrorCode {
    EmailTaken,
    InvalidInput,
    Internal,
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct ErrorType {
    pub message: String,
    pub code: RegisterErrorCode,
}

impl From<&UsersError> for ErrorType {
    fn from(err: &UsersError) -> Self {
        match err {
            UsersError::EmailTaken(_) => ErrorType {
                message: err.to_string(),
                code: RegisterErrorCode::EmailTaken,
            },
            UsersError::Validation(_) => ErrorType {
                message: err.to_string(),
                code: RegisterErrorCode::InvalidInput,
            },
            // Backend details stay in the server log
            UsersError::Hashing(_) | UsersError::Storage(_) => ErrorType {
                message: "Registration failed, please try again later".to_string(),
                code: RegisterErrorCode::Internal,
            },
        }
    }
}

/// Result of `register`: exactly one of `activation_token` and `error` is
/// set. Only constructible from a users-service outcome.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(rename_fields = "snake_case")]
pub struct RegisterResponse {
    activation_token: Option<String>,
    error: Option<ErrorType>,
}

#[cfg(test)]
impl RegisterResponse {
    pub fn token(&self) -> Option<&str> {
        self.activation_token.as_deref()
    }

    pub fn failure(&self) -> Option<&ErrorType> {
        self.error.as_ref()
    }
}

impl From<UsersResult<String>> for RegisterResponse {
    fn from(outcome: UsersResult<String>) -> Self {
        match outcome {
            Ok(token) => Self {
                activation_token: Some(token),
                error: None,
            },
            Err(err) => Self {
                activation_token: None,
                error: Some(ErrorType::from(&err)),
            },
        }
    }
}
