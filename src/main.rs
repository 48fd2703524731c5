use std::sync::Arc;

use post_api::{AppState, app, service::PostService, store::MemoryStore};
use tracing::info;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    // Wire the store into the service once; handlers share it through state
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(PostService::new(store));

    let router = app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health      - Health check");
    info!("  POST   /posts       - Create post");
    info!("  GET    /posts       - List posts");
    info!("  GET    /posts/:id   - Get specific post");
    info!("  PUT    /posts/:id   - Update post");
    info!("  DELETE /posts/:id   - Delete post");

    axum::serve(listener, router).await.unwrap();
}
