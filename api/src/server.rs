use crate::{
    AppState,
    config::Config,
    errors::{handle_middleware_error, method_not_allowed, not_found},
    routes::{health_check, hello},
};
use axum::{Router, error_handling::HandleErrorLayer, routing::get};
use std::{future::Future, time::Duration};
use tokio::{net::TcpListener, signal};
use tower::{ServiceBuilder, limit::GlobalConcurrencyLimitLayer, timeout::TimeoutLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

/// Builds the full application: routes, state and middleware
pub fn create_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state);

    apply_middleware(router, config.request_timeout, config.max_concurrent_requests)
}

/// Wraps a router in tracing, CORS, the request timeout and the in-flight cap.
/// Timeout failures come back as `408` JSON errors.
///
/// The cap is one semaphore shared by every route. Requests queued on it
/// wait in `poll_ready`, before the timeout clock starts.
pub fn apply_middleware(
    router: Router,
    request_timeout: Duration,
    max_concurrent_requests: usize,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .layer(TimeoutLayer::new(request_timeout))
            .layer(GlobalConcurrencyLimitLayer::new(max_concurrent_requests)),
    )
}

/// Serves until `shutdown` resolves, then drains in-flight requests
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C or SIGTERM (sent by the orchestrator when a task is replaced)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
