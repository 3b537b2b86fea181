use lineup_backend::{build_router, services::squad_store::load_squads, AppConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();

    let squads = load_squads(&config.squads_path)
        .await
        .expect("Could not read squads file");

    let app = build_router(&config, squads);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Could not bind listener");
    info!("Started server on {}.", config.bind_addr);
    axum::serve(listener, app).await.expect("Server error");
}
