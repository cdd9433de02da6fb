//! REST API layer built on Axum.
//!
//! One possible client of [`CarlotApi`], exposing the fleet under `/api`:
//!
//! ```text
//! GET    /api/cars            list every car
//! GET    /api/cars/:car_id    one car
//! POST   /api/cars            add a car
//! DELETE /api/cars/:car_id    delete an available car
//! POST   /api/rent            rent a car
//! POST   /api/return/:car_id  return a car
//! GET    /health              liveness and car count
//! ```
//!
//! The tokio runtime serves requests on several threads while the record store
//! assumes one caller at a time, so the facade lives behind a single mutex in
//! [`handlers::AppState`].

/// API error type mapped to HTTP status codes.
pub mod errors;
/// HTTP request handlers and application state.
pub mod handlers;
/// Request and response bodies.
pub mod models;

use crate::api::CarlotApi;
use crate::error::{CarlotError, Result};
use crate::store::CarStore;
use axum::routing::{get, post};
use axum::Router;
use handlers::AppState;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router<S>(api: CarlotApi<S>) -> Router
where
    S: CarStore + Send + 'static,
{
    let state = AppState::new(api);

    Router::new()
        .route("/health", get(handlers::health::<S>))
        .route(
            "/api/cars",
            get(handlers::list_cars::<S>).post(handlers::add_car::<S>),
        )
        .route(
            "/api/cars/:car_id",
            get(handlers::get_car::<S>).delete(handlers::delete_car::<S>),
        )
        .route("/api/rent", post(handlers::rent_car::<S>))
        .route("/api/return/:car_id", post(handlers::return_car::<S>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl+C or SIGTERM.
pub async fn serve<S>(api: CarlotApi<S>, addr: SocketAddr) -> Result<()>
where
    S: CarStore + Send + 'static,
{
    let app = create_router(api);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(CarlotError::Io)?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .await
        .map_err(CarlotError::Io)?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
}
