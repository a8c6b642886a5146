use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use tokio::net::TcpListener;

use crate::config::ServerSettings;
use crate::error::{Result, SignupError};

use super::schema::SignupSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphql_handler(State(schema): State<SignupSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Builds the HTTP router. With `playground` set, GET on `/` and
/// `/graphql` serves the GraphiQL IDE.
pub fn router(schema: SignupSchema, playground: bool) -> Router {
    let mut endpoint = post(graphql_handler);
    let mut router = Router::new();
    if playground {
        endpoint = endpoint.get(graphiql);
        router = router.route("/", get(graphiql));
    }
    router.route(GRAPHQL_PATH, endpoint).with_state(schema)
}

/// Serves the schema on an already bound listener until ctrl-c.
pub async fn serve(listener: TcpListener, schema: SignupSchema, playground: bool) -> Result<()> {
    axum::serve(listener, router(schema, playground))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("GraphQL server stopped");
    Ok(())
}

pub async fn run_server(schema: SignupSchema, settings: &ServerSettings) -> Result<()> {
    let addr = settings.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| SignupError::Server(format!("failed to bind {}: {}", addr, e)))?;
    tracing::info!(%addr, playground = settings.playground, "GraphQL server listening");
    serve(listener, schema, settings.playground).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
