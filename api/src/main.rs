// ============================================================================
// MINIMAL API SERVICE
// ============================================================================

// - GET /        greeting, used to smoke-test a deployment
// - GET /health  liveness probe for the load balancer target group
// - Graceful shutdown on SIGTERM for rolling deployments

use anyhow::Context;
use ecs_api::{AppState, config::Config, logging, server};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize logging
    logging::init_tracing(&config.log_filter)?;

    let app = server::create_router(AppState::default(), &config);

    // Start server
    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /                 - Greeting");
    info!("  GET    /health           - Health check");

    server::serve(listener, app, server::shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("Server stopped");
    Ok(())
}
