use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::service::{UsersError, UsersResult, UsersService};
use crate::config::UsersSettings;
use crate::model::{NewUser, User};
use crate::validation::normalize_email;

const ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const USER_ID_PREFIX: &str = "usr_";
const USER_ID_LENGTH: usize = 12;

struct StoredUser {
    user: User,
    password_hash: String,
    activation_token: String,
}

#[derive(Default)]
struct UserTable {
    by_id: HashMap<String, StoredUser>,
    /// Normalized email -> user id
    by_email: HashMap<String, String>,
}

/// Process-local users backend. State is lost on restart.
pub struct MemoryUsersService {
    token_length: usize,
    table: RwLock<UserTable>,
}

impl MemoryUsersService {
    pub fn new(settings: &UsersSettings) -> Self {
        Self {
            token_length: settings.activation_token_length,
            table: RwLock::new(UserTable::default()),
        }
    }

    fn generate_user_id() -> String {
        format!(
            "{}{}",
            USER_ID_PREFIX,
            nanoid::format(nanoid::rngs::default, &ALPHABET, USER_ID_LENGTH)
        )
    }

    fn generate_activation_token(&self) -> String {
        nanoid::format(nanoid::rngs::default, &ALPHABET, self.token_length)
    }

    /// Argon2 is CPU bound, so hashing runs off the async workers.
    async fn hash_password(password: String) -> UsersResult<String> {
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| UsersError::Hashing(e.to_string()))
        })
        .await
        .map_err(|e| UsersError::Hashing(e.to_string()))?
    }

    /// Checks a plaintext password against the stored hash.
    pub async fn verify_password(&self, email: &str, password: &str) -> UsersResult<bool> {
        let table = self.table.read().await;
        let Some(stored) = table
            .by_email
            .get(&normalize_email(email))
            .and_then(|id| table.by_id.get(id))
        else {
            return Ok(false);
        };

        let parsed = PasswordHash::new(&stored.password_hash)
            .map_err(|e| UsersError::Hashing(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Returns the activation token issued for an account, if any.
    pub async fn activation_token(&self, user_id: &str) -> Option<String> {
        let table = self.table.read().await;
        table
            .by_id
            .get(user_id)
            .map(|stored| stored.activation_token.clone())
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryUsersService {
    fn default() -> Self {
        Self::new(&UsersSettings::default())
    }
}

#[async_trait]
impl UsersService for MemoryUsersService {
    async fn register(&self, new_user: NewUser) -> UsersResult<String> {
        new_user.validate()?;

        let email_key = normalize_email(&new_user.email);
        if self.table.read().await.by_email.contains_key(&email_key) {
            tracing::info!(email = %email_key, "Rejecting duplicate registration");
            return Err(UsersError::EmailTaken(email_key));
        }

        let NewUser {
            name,
            password,
            phone_number,
            ..
        } = new_user;
        let password_hash = Self::hash_password(password).await?;

        let mut table = self.table.write().await;
        // Another registration may have won the race while we were hashing
        if table.by_email.contains_key(&email_key) {
            tracing::info!(email = %email_key, "Rejecting duplicate registration");
            return Err(UsersError::EmailTaken(email_key));
        }

        let mut id = Self::generate_user_id();
        while table.by_id.contains_key(&id) {
            id = Self::generate_user_id();
        }

        let user = User::new(id.clone(), name.trim().to_string(), email_key.clone(), phone_number);
        let activation_token = self.generate_activation_token();

        tracing::info!(id = %id, email = %email_key, "Registered user");
        table.by_email.insert(email_key, id.clone());
        table.by_id.insert(
            id,
            StoredUser {
                user,
                password_hash,
                activation_token: activation_token.clone(),
            },
        );

        Ok(activation_token)
    }

    async fn find_by_id(&self, id: &str) -> UsersResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.by_id.get(id).map(|stored| stored.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> UsersResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table
            .by_email
            .get(&normalize_email(email))
            .and_then(|id| table.by_id.get(id))
            .map(|stored| stored.user.clone()))
    }
}
