//! # Signup - a GraphQL user-registration service
//!
//! Exposes a `User` object type and a `register` mutation over GraphQL. The
//! mutation validates its input declaratively, delegates to a
//! [`users::UsersService`] and answers with either an activation token or an
//! error descriptor.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a signup.toml with defaults
//! signup init --port 4000
//!
//! # Start the server
//! signup serve
//!
//! # Print the schema
//! signup schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (User, NewUser)
//! - [`users`]: The users service seam and its in-memory backend
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `signup.toml` configuration files and their discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `SignupError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
///
/// Provides the async-graphql schema served over axum.
pub mod graphql;

/// Data models for registered users.
pub mod model;

/// User-management layer.
pub mod users;

/// Input validation utilities.
///
/// Validates names, emails, passwords and phone numbers.
pub mod validation;

pub mod logging;
