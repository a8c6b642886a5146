use crate::config::ServerSettings;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "signup")]
#[command(
    author,
    version,
    about = "A GraphQL user-registration service"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for signup.toml by default)
    #[arg(long, global = true, env = "SIGNUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "SIGNUP_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a signup.toml with default settings to the current directory
    Init {
        /// Host to bind the server to
        #[arg(long, default_value_t = ServerSettings::default().host)]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = ServerSettings::default().port)]
        port: u16,
    },

    /// Start GraphQL HTTP server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Disable the GraphiQL IDE
        #[arg(long)]
        no_playground: bool,
    },

    /// Print the GraphQL schema (SDL)
    Schema,

    /// Execute a GraphQL query against a fresh in-process backend
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },
}
