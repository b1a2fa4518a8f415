use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use avisos_api::{
    build_router,
    config::Config,
    db,
    repository::{AvisoRepository, InMemoryAvisoRepository, PgAvisoRepository},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let repository: Arc<dyn AvisoRepository> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::create_pool(url, config.database_max_connections).await?;
            db::run_migrations(&pool).await?;
            info!("Database connected and migrations applied");
            Arc::new(PgAvisoRepository::new(pool))
        }
        None => {
            info!("DATABASE_URL not set, using in-memory storage");
            Arc::new(InMemoryAvisoRepository::new())
        }
    };

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(repository, config)?;
    info!(
        storage = state.repository.backend(),
        requests = ?state.mediator.registered_requests(),
        "Request handlers registered"
    );
    let app = build_router(state);

    info!("avisos API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
