//! GraphQL schema, resolvers and HTTP server for user registration.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! signup serve --port 4000
//!
//! # Print the schema
//! signup schema
//!
//! # Execute a document against a throwaway in-process backend
//! signup query 'mutation { register(registerDto: { name: "John Doe", email: "john@example.com", password: "password123", phone_number: 1234567890 }) { activation_token error { message code } } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `user`, `userByEmail`
//! - **Mutations**: `register`

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, SignupSchema, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server, serve};
pub use types::*;
