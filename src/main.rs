use anyhow::Result;
use poemsland_core::application::{ports::cache::SlugIndexCache, services::ApplicationServices};
use poemsland_core::config::AppConfig;
use poemsland_core::domain::poem::PoemReadRepository;
use poemsland_core::infrastructure::{
    cache::DisabledSlugIndexCache, repositories::InMemoryPoemRepository,
};
use poemsland_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let repository = match config.poems_seed_path() {
        Some(path) => InMemoryPoemRepository::from_json_file(path).await?,
        None => {
            tracing::warn!("POEMS_SEED_PATH not set, starting with an empty gallery");
            InMemoryPoemRepository::default()
        }
    };
    let poem_repo: Arc<dyn PoemReadRepository> = Arc::new(repository);
    let index_cache: Arc<dyn SlugIndexCache> = Arc::new(DisabledSlugIndexCache);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&poem_repo),
        Arc::clone(&index_cache),
        config.gallery_page_size(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
