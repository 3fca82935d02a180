//! The task store HTTP API.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | `GET` | `/health` | 200 `{"status":"ok","timestamp":...}` |
//! | `GET` | `/api/todos` | 200, all tasks newest first, with `count` |
//! | `POST` | `/api/todos` | 201, the created task |
//! | `PATCH` | `/api/todos/{id}` | 200, the task with `completed` flipped |
//! | `DELETE` | `/api/todos/{id}` | 200, no data |
//!
//! Anything else answers 404 `Endpoint not found`. CORS is open to any origin.

pub mod error;
pub mod handlers;
pub mod store;

use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_warning};
use axum::{
    routing::{get, patch},
    Router,
};
use std::future::Future;
use store::Store;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route("/api/todos/{id}", patch(handlers::toggle_todo).delete(handlers::delete_todo))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serves the API on `listener` until `shutdown` resolves, then lets
/// in-flight requests finish.
pub async fn run<F>(listener: TcpListener, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = listener.local_addr()?;
    msg_info!(Message::ServerListening(address.to_string()));

    axum::serve(listener, router(state)).with_graceful_shutdown(shutdown).await?;

    msg_info!(Message::ServerStopped);
    Ok(())
}

/// Resolves on SIGTERM or SIGINT (Ctrl-C on Windows).
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => msg_info!(Message::ReceivedSigterm),
                    _ = sigint.recv() => msg_info!(Message::ReceivedSigint),
                }
            }
            (Err(e), _) | (_, Err(e)) => {
                msg_warning!(Message::CtrlCListenFailed(e.to_string()));
                wait_for_ctrl_c().await;
            }
        }
    }

    #[cfg(windows)]
    {
        wait_for_ctrl_c().await;
    }

    #[cfg(not(any(unix, windows)))]
    {
        msg_warning!(Message::SignalHandlingNotSupported);
        std::future::pending::<()>().await;
    }

    msg_info!(Message::ServerShuttingDown);
}

#[cfg(any(unix, windows))]
async fn wait_for_ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => msg_info!(Message::ReceivedSigint),
        Err(e) => {
            msg_error!(Message::CtrlCListenFailed(e.to_string()));
            std::future::pending::<()>().await;
        }
    }
}
