//! PC Showdown HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use pcshowdown_api::config::ServerConfig;
use pcshowdown_api::router::build_app_router;
use pcshowdown_api::state::AppState;
use pcshowdown_db::DbPool;

const DEFAULT_LOG_FILTER: &str = "pcshowdown_api=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        static_dir = %config.static_dir.display(),
        max_page_size = config.max_page_size,
        "Configuration loaded"
    );

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = open_catalog(&database_url).await;

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );
    let app = build_app_router(
        AppState {
            pool,
            config: Arc::new(config.clone()),
        },
        &config,
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Cannot bind {addr}: {e}"));
    tracing::info!(%addr, "PC Showdown listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_stop())
        .await
        .expect("HTTP server failed");

    tracing::info!("PC Showdown stopped");
}

/// `RUST_LOG` wins; otherwise log this crate and request traces at debug.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect to Postgres, confirm it answers, and bring the schema up to date.
/// Any failure aborts startup.
async fn open_catalog(database_url: &str) -> DbPool {
    let pool = pcshowdown_db::create_pool(database_url)
        .await
        .expect("Cannot connect to the build catalog database");

    pcshowdown_db::health_check(&pool)
        .await
        .expect("Build catalog database is not answering");

    pcshowdown_db::run_migrations(&pool)
        .await
        .expect("Build catalog migrations failed");

    tracing::info!("Build catalog database ready");
    pool
}

/// Resolve on Ctrl-C, or on SIGTERM where the platform has it.
async fn wait_for_stop() {
    let interrupt = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => tracing::info!("Interrupted, draining connections"),
        () = terminate => tracing::info!("Terminated, draining connections"),
    }
}
