// src/server/routes.rs

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::render::{TaskResponse, render_script, to_responses};
use crate::request::TasksRequest;
use crate::server::AppState;
use crate::server::error::ApiError;

/// `POST /tasks/sort`
pub async fn sort_tasks(
    State(state): State<AppState>,
    Json(request): Json<TasksRequest>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let sorted = state.sort(request)?;
    Ok(Json(to_responses(&sorted)))
}

/// `POST /tasks/sort-commands`
pub async fn sort_commands(
    State(state): State<AppState>,
    Json(request): Json<TasksRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let sorted = state.sort(request)?;
    let script = render_script(&sorted);
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], script))
}
