use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::validation;

/// A registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: i64,
    pub activated: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: String, name: String, email: String, phone_number: i64) -> Self {
        Self {
            id,
            name,
            email,
            phone_number,
            activated: false,
            created_at: Utc::now(),
        }
    }
}

/// Registration request as seen by the users service. The password is
/// plaintext here and must be hashed before it is stored.
#[derive(Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: i64,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        phone_number: i64,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            phone_number,
        }
    }

    /// Runs every field check, stopping at the first failure.
    pub fn validate(&self) -> Result<()> {
        validation::validate_name(&self.name)?;
        validation::validate_email(&self.email)?;
        validation::validate_password(&self.password)?;
        validation::validate_phone_number(self.phone_number)?;
        Ok(())
    }
}

// Keeps the password out of logs and panic messages.
impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_debug_redacts_password() {
        let new_user = NewUser::new("John Doe", "john@example.com", "password123", 1234567890);
        let debug = format!("{:?}", new_user);
        assert!(debug.contains("john@example.com"));
        assert!(!debug.contains("password123"));
    }

    #[test]
    fn test_new_user_validate() {
        let valid = NewUser::new("John Doe", "john@example.com", "password123", 1234567890);
        assert!(valid.validate().is_ok());

        let bad_email = NewUser::new("John Doe", "not-an-email", "password123", 1234567890);
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_user_starts_inactive() {
        let user = User::new(
            "usr_1".to_string(),
            "John Doe".to_string(),
            "john@example.com".to_string(),
            1234567890,
        );
        assert!(!user.activated);
        assert!(user.created_at <= Utc::now());
    }
}
