// src/server/mod.rs

//! HTTP surface for the sorter.
//!
//! - `POST /tasks/sort` returns the sorted tasks as `{name, command}` JSON.
//! - `POST /tasks/sort-commands` returns the sorted commands as a bash script.
//!
//! Both routes validate the request before calling the [`TaskService`]; see
//! [`error`] for how failures map to status codes.

pub mod error;
pub mod routes;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};

use crate::config::ConfigFile;
use crate::errors::Result;
use crate::request::TasksRequest;
use crate::service::TaskService;
use crate::task::{Task, TaskSet};

pub use error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    service: Arc<dyn TaskService>,
}

impl AppState {
    pub fn new(service: Arc<dyn TaskService>) -> Self {
        Self { service }
    }

    /// Validate `request` and sort it through the configured service.
    pub fn sort(&self, request: TasksRequest) -> Result<Vec<Task>> {
        let tasks = TaskSet::try_from(request)?;
        Ok(self.service.sort_tasks(&tasks)?)
    }
}

/// Build the router with its middleware stack.
pub fn router(state: AppState, config: &ConfigFile) -> Router {
    let mut router = Router::new()
        .route("/tasks/sort", post(routes::sort_tasks))
        .route("/tasks/sort-commands", post(routes::sort_commands))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes()))
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    if config.cors() {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
                .max_age(Duration::from_secs(3600)),
        );
    }

    router.with_state(state)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &ConfigFile, service: Arc<dyn TaskService>) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    serve_on(listener, config, service, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve_on<F>(
    listener: TcpListener,
    config: &ConfigFile,
    service: Arc<dyn TaskService>,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    let app = router(AppState::new(service), config);

    info!(%addr, "starting HTTP server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("HTTP server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
