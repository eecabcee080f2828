#![forbid(unsafe_code)]

use std::env;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tonight_core::ENV_TONIGHT_LOG_LEVEL;
use tonight_server::{build_router, ApiConfig, AppState};
use tonight_store::FixtureStore;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(ENV_TONIGHT_LOG_LEVEL).unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("TONIGHT_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let bind_addr = env::var("TONIGHT_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let api = ApiConfig {
        max_body_bytes: env_usize("TONIGHT_MAX_BODY_BYTES", 16 * 1024),
        cache_ttl: Duration::from_secs(env_u64("TONIGHT_CACHE_TTL_SECS", 30)),
    };

    let store = FixtureStore::load().map_err(|e| format!("catalog fixtures failed to load: {e}"))?;
    info!(
        events = store.event_count(),
        venues = store.venue_count(),
        guestlists = store.guestlist_count(),
        "catalog loaded"
    );

    let state = AppState::with_config(Arc::new(store), api);
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("tonight-server listening on {bind_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
