use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use clap::Parser;
use dotenv::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exploder_web::backend::ExplorerApi;
use exploder_web::config::Settings;
use exploder_web::metrics::{self, Metrics};
use exploder_web::poller::{DashboardPoller, Snapshot};
use exploder_web::web::{self, AppState};

#[derive(Parser)]
struct Args {
    /// Configuration file to load (name without extension)
    #[arg(long)]
    config: Option<String>,
    /// Skip the startup fetch of the backend network status
    #[arg(long)]
    skip_backend_check: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::new(args.config.as_deref()).unwrap_or_else(|e| {
        error!("Failed to load configuration: {:?}", e);
        std::process::exit(1);
    });

    info!("Loaded settings: {:?}", settings);

    let prometheus_handle = metrics::setup_metrics_recorder();
    let metrics_state = Metrics::new(prometheus_handle);

    info!("Prometheus metrics initialized");

    let api = ExplorerApi::new(
        settings.backend.url.clone(),
        Duration::from_secs(settings.backend.request_timeout_secs),
    )?;

    // Network status is fetched once at startup. A failure only logs; the
    // dashboard then renders its node-information placeholder.
    let snapshot = Snapshot::shared();
    if !args.skip_backend_check {
        match api.network_status().await {
            Ok(status) => {
                info!(
                    "Connected to explorer backend, indexed height {} of {}",
                    status.height, status.client.blocks
                );
                snapshot.write().await.status = Some(status);
            }
            Err(e) => error!("Failed to fetch network status: {:?}", e),
        }
    }

    let poller = Arc::new(DashboardPoller::new(
        api.clone(),
        Arc::clone(&snapshot),
        Duration::from_secs(settings.dashboard.blocks_refresh_secs),
        Duration::from_secs(settings.dashboard.transactions_refresh_secs),
    ));
    poller.start();

    let cors = CorsLayer::new()
        .allow_origin(
            settings
                .application
                .cors_allow_origin
                .parse::<HeaderValue>()
                .unwrap_or_else(|_| HeaderValue::from_static("*")),
        )
        .allow_methods(
            settings
                .application
                .cors_allow_methods
                .split(',')
                .map(|s| s.trim().parse::<Method>().unwrap_or(Method::GET))
                .collect::<Vec<Method>>(),
        )
        .allow_headers(
            settings
                .application
                .cors_allow_headers
                .split(',')
                .map(|s| {
                    header::HeaderName::from_lowercase(s.trim().to_lowercase().as_bytes())
                        .unwrap_or(header::CONTENT_TYPE)
                })
                .collect::<Vec<_>>(),
        );

    let state = Arc::new(AppState {
        api,
        snapshot,
        blocks_per_page: settings.dashboard.blocks_per_page,
        halving_timestamp_ms: settings.dashboard.halving_timestamp_ms,
    });

    let app = Router::new()
        .merge(web::create_router(state))
        .route(
            "/metrics",
            axum::routing::get(move || async move {
                let body = metrics_state.prometheus_handle.render();
                (
                    [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
                    body,
                )
            }),
        )
        .layer(cors);

    let addr = SocketAddr::from((
        settings
            .application
            .host
            .parse::<std::net::IpAddr>()
            .unwrap_or_else(|_| "0.0.0.0".parse().unwrap()),
        settings.application.port,
    ));

    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
