//! Writer onboarding HTTP server.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use writer_onboarding::adapters::{
    app_router, AppState, CompletionLogger, InMemoryEventBus, InMemoryWizardStore, Retention,
    COMPLETED_EVENT,
};
use writer_onboarding::config::AppConfig;
use writer_onboarding::ports::EventSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let store = InMemoryWizardStore::with_retention(Retention::from(&config.sessions));
    let sweeper = store.spawn_sweeper(config.sessions.sweep_interval());
    let repository = Arc::new(store);
    let bus = Arc::new(InMemoryEventBus::new());
    bus.subscribe(COMPLETED_EVENT, Arc::new(CompletionLogger::new()));

    let state = AppState::new(repository, bus, &config);
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Writer onboarding server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.features.json_logs {
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

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
