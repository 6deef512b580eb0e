//! Customer server: picks the store from settings, seeds if asked, serves the REST API.

use customer_service::{app, open_store, seed_customers, AppState, CustomerService, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("customer_service=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let (store, pool) = open_store(&settings).await?;
    let customers = CustomerService::new(store);
    if settings.seed_customers > 0 {
        seed_customers(&customers, settings.seed_customers).await?;
    }

    let state = AppState {
        customers,
        store: settings.store,
        pool,
    };
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
