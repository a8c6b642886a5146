use crate::graphql::run_server;
use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(
    mut ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    no_playground: bool,
) -> Result<()> {
    ctx.config.apply_server_overrides(host, port, no_playground)?;

    match &ctx.config_path {
        Some(path) => tracing::info!(config = %path.display(), "Using config file"),
        None => tracing::info!("No config file found, using defaults"),
    }

    let schema = ctx.schema();
    let settings = ctx.config.server.clone();

    println!(
        "Starting GraphQL server on http://{}/graphql",
        settings.bind_address()
    );
    if settings.playground {
        println!("GraphiQL IDE: http://{}/", settings.bind_address());
    }

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, &settings).await })?;
    Ok(())
}
