use axum::{Router, middleware::from_fn};
use dotenvy::dotenv;

use cda_portal_axum::{portal_api_router, route_guard};

mod pages;
mod server;

use server::{init_tracing, serve_http};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_tracing("demo_portal");

    cda_portal_axum::init().await?;

    let app = Router::new()
        .merge(pages::router())
        .nest("/api", portal_api_router())
        .layer(from_fn(route_guard));

    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3001);

    serve_http(port, app).await?;
    Ok(())
}
