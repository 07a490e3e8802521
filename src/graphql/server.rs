use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use serde_json::json;

use super::FarmApi;

pub fn router(api: FarmApi) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .route("/health", get(health))
        .with_state(api)
}

async fn graphql_handler(State(api): State<FarmApi>, request: GraphQLRequest) -> GraphQLResponse {
    api.execute(request.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn run_server(api: FarmApi, host: &str, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(address = %listener.local_addr()?, "GraphQL server listening");
    axum::serve(listener, router(api)).await?;
    Ok(())
}
