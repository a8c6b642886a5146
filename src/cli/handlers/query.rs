use anyhow::{Context, Result};

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    execute(ctx, query, variables)
}

/// Runs one document against a fresh backend and prints the JSON response.
pub(super) fn execute(ctx: CommandContext, document: String, variables: Option<String>) -> Result<()> {
    let schema = ctx.schema();

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Invalid --variables JSON")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "GraphQL request returned errors");
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
