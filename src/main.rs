use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use signup::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use signup::cli::{Cli, Commands};
use signup::config::SignupConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    signup::logging::init(cli.verbose, cli.log_file.as_deref())
        .context("Failed to initialize logging")?;

    match cli.command {
        Commands::Init { host, port } => handle_init(host, port),
        Commands::Serve {
            host,
            port,
            no_playground,
        } => {
            let ctx = load_context(cli.config.as_deref())?;
            handle_serve(ctx, host, port, no_playground)
        }
        Commands::Schema => {
            let ctx = load_context(cli.config.as_deref())?;
            handle_schema(ctx)
        }
        Commands::Query { query, variables } => {
            let ctx = load_context(cli.config.as_deref())?;
            handle_query(ctx, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let ctx = load_context(cli.config.as_deref())?;
            handle_mutate(ctx, mutation, variables)
        }
    }
}

fn load_context(config: Option<&Path>) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let (config, config_path) = SignupConfig::load(config, &cwd)
        .context("Failed to load signup configuration")?;
    Ok(CommandContext::new(config, config_path))
}
