//! Server bootstrap: config from env, pool + migrations, explicit router.

use axum::{extract::Request, ServiceExt};
use holocron::{app_router, connect, AppState, Config};
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("holocron=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    let pool = connect(&config.database_url).await?;
    let state = AppState { pool };

    // strict_slashes=false equivalent: /create/planet/ and /create/planet
    // are the same route.
    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
    Ok(())
}
