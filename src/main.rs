//! Server binary: env config, tracing init, store selection, serve.

use account_service::{
    app_router, store::ensure_accounts_table, AccountStore, AppState, Config, MemoryAccountStore,
    PgAccountStore,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("account_service=info")),
        )
        .init();

    let config = Config::from_env();

    let store: Arc<dyn AccountStore> = match &config.database_url {
        Some(url) => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(url)
                .await?;
            ensure_accounts_table(&pool).await?;
            Arc::new(PgAccountStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, serving from in-memory store");
            Arc::new(MemoryAccountStore::new())
        }
    };

    let app = app_router(AppState::new(store)).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
