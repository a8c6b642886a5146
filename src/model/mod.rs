//! Data models for registered users.
//!
//! - [`User`]: A registered account as stored by the users service
//! - [`NewUser`]: The fields required to register an account

mod user;

pub use user::{NewUser, User};
