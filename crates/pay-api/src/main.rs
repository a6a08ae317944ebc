//! # Checkout Relay
//!
//! Keeps PayPal credentials on the server while the storefront creates and
//! captures orders.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export PAYPAL_CLIENT_ID=...
//! export PAYPAL_CLIENT_SECRET=...
//! export PAYPAL_ENV=sandbox   # or live
//! export PORT=8888
//!
//! # Run the server
//! checkout-relay
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let state = AppState::from_env()?;
    let addr = state.config.socket_addr()?;

    info!("Static assets: {}", state.config.static_dir.display());
    info!("Order gateway: {}", state.gateway.provider_name());

    let app = routes::create_router(state);

    info!("Checkout relay listening at http://{}/", addr);
    info!("Create order: POST http://{}/api/orders", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  Checkout Relay
  ━━━━━━━━━━━━━━━━━━━━━━━
  PayPal orders, server-signed
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
