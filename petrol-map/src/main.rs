use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use petrol_map::config::AppConfig;
use petrol_map::geocoder::{BingClient, BingConfig};
use petrol_map::overpass::{OverpassClient, OverpassConfig};
use petrol_map::search::StationSearch;
use petrol_map::web::{AppState, CsrfSigner, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut bing_config =
        BingConfig::new(&config.bing_maps_key).with_timeout(config.http_timeout_secs);
    if let Some(url) = &config.bing_base_url {
        bing_config = bing_config.with_base_url(url);
    }
    let geocoder = BingClient::new(bing_config)?;

    let mut overpass_config = OverpassConfig::default().with_timeout(config.http_timeout_secs);
    if let Some(url) = &config.overpass_url {
        overpass_config = overpass_config.with_base_url(url);
    }
    let overpass = OverpassClient::new(overpass_config)?;

    let search = StationSearch::new(
        Arc::new(geocoder),
        Arc::new(overpass),
        config.search_radius_meters,
    );
    let state = AppState::new(search, CsrfSigner::new(&config.secret_key));
    let app = create_router(state, &config.static_dir);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        addr = %config.bind_addr,
        radius_meters = config.search_radius_meters,
        "petrol station map listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => warn!(error = %e, "failed to listen for shutdown signal"),
    }
}
