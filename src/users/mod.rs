//! User-management layer behind the GraphQL resolvers.
//!
//! ## Components
//!
//! - [`UsersService`]: The collaborator the `register` mutation delegates to
//! - [`UsersError`]: Failures a users backend can report
//! - [`MemoryUsersService`]: In-process backend with Argon2 password hashing

mod memory;
mod service;

pub use memory::MemoryUsersService;
pub use service::{DynUsersService, UsersError, UsersResult, UsersService};
