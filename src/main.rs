//! customer-gateway server entry point.
//!
//! Starts the Axum HTTP server with the customer REST endpoints.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use customer_gateway::api;
use customer_gateway::app_state::AppState;
use customer_gateway::config::GatewayConfig;
use customer_gateway::domain::sample::generate_customers;
use customer_gateway::persistence::{CustomerStore, InMemoryCustomerStore, PostgresCustomerStore};
use customer_gateway::service::CustomerService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env().context("loading configuration")?;
    tracing::info!(
        addr = %config.listen_addr,
        persistence = config.persistence_enabled,
        default_page_size = config.pagination.default_page_size(),
        max_page_size = config.pagination.max_page_size(),
        link_mode = %config.pagination.link_mode(),
        "starting customer-gateway"
    );

    // Build persistence + service layer
    let store: CustomerStore = if config.persistence_enabled {
        PostgresCustomerStore::connect(&config)
            .await
            .context("connecting to postgres")?
            .into()
    } else {
        InMemoryCustomerStore::with_customers(generate_customers(config.seed_customer_count))
            .into()
    };
    let customer_service = Arc::new(CustomerService::new(store));

    if config.persistence_enabled && config.seed_on_startup {
        customer_service
            .seed_if_empty(config.seed_customer_count)
            .await
            .context("seeding sample customers")?;
    }

    // Build application state
    let app_state = AppState {
        customer_service,
        pagination: config.pagination,
        public_base_uri: config.public_base_uri.as_deref().map(Arc::from),
        fake_customer_count: config.seed_customer_count,
    };

    let app = api::build_app(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
