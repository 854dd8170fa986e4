mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

#[tokio::main]
async fn main() {
    eprintln!("Initializing Bearly Used SDK...");
    let mut builder = bearly_sdk::BearlySdk::builder();
    if let Ok(url) = std::env::var("BEARLY_BACKEND_URL") {
        builder = builder.base_url(url);
    }
    let sdk = builder.build().expect("Failed to initialize Bearly Used SDK");
    eprintln!("SDK ready, marketplace backend at {}.", sdk.base_url());

    let state = Arc::new(AppState { sdk });

    let app = Router::new()
        .route("/api/health", get(routes::health::get_health))
        .route("/api/listings", get(routes::listings::search_listings))
        .route("/api/listings/{id}", get(routes::listings::get_listing))
        .route(
            "/api/sellers/{seller_id}/listings",
            get(routes::listings::seller_listings),
        )
        .route("/api/users/{clerk_id}", get(routes::users::get_user))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = "0.0.0.0:3000";
    eprintln!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
