use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{routing::get, routing::post, Router};
use postbox::config::SeedMessage;
use postbox::error::Result;
use postbox::schema::{GraphQlSchema, SchemaVariant};
use postbox::store::MessageStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Run the serve command to start the GraphQL server
pub async fn run(config_path: String, port: u16, schema: Option<SchemaVariant>) -> Result<()> {
    tracing::info!("📖 Loading configuration from {}", config_path);

    // Load config
    let config = postbox::config::load_config(&config_path)?;

    // CLI flags win over the config file
    let server_port = if port != 4000 { port } else { config.server.port };
    let variant = schema.unwrap_or(config.server.schema);

    tracing::info!(
        "🔧 Seeding message store with {} messages...",
        config.messages.len()
    );
    let store = Arc::new(MessageStore::with_seed(
        config.messages.into_iter().map(SeedMessage::into_record),
    ));

    let schema = GraphQlSchema::build(variant, store)?;

    tracing::info!("✅ Schema built successfully ({:?} variant)", variant);
    tracing::info!("🚀 GraphQL server running on http://localhost:{}", server_port);
    tracing::info!("📊 Playground: http://localhost:{}/graphql", server_port);
    tracing::info!("💡 Press Ctrl+C to stop the server");

    // Start the HTTP server
    start_http_server(schema, &config.server.bind, server_port).await
}

async fn start_http_server(schema: GraphQlSchema, bind: &str, port: u16) -> Result<()> {
    // Wrap schema in Arc for sharing across handlers
    let schema = Arc::new(schema);

    // Create the router with GraphQL endpoints
    let app = Router::new()
        .route("/graphql", post(graphql_handler).get(graphql_playground))
        .route("/health", get(health_check))
        .with_state(schema)
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", bind, port).parse().map_err(|e| {
        postbox::error::PostboxError::Config(format!(
            "Invalid bind address '{}:{}': {}",
            bind, port, e
        ))
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        postbox::error::PostboxError::Config(format!(
            "Failed to bind to port {}: {}. Port may be in use.",
            port, e
        ))
    })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| postbox::error::PostboxError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

async fn graphql_handler(
    axum::extract::State(schema): axum::extract::State<Arc<GraphQlSchema>>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphql_playground() -> axum::response::Html<String> {
    axum::response::Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}

async fn health_check() -> &'static str {
    "OK"
}
