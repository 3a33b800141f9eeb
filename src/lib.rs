// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod render;
pub mod request;
pub mod server;
pub mod service;
pub mod task;
pub mod types;

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command, ServeArgs, SortArgs};
use crate::config::load_or_default;
use crate::config::validate::parse_bind_addr;
use crate::request::{TasksRequest, load_tasks_from_path, load_tasks_from_reader};
use crate::service::{GraphTaskService, TaskService};
use crate::task::TaskSet;

/// High-level entry point used by `main.rs`.
///
/// - `sort`: load a task file, validate, sort, render once.
/// - `serve`: load config and run the HTTP service until Ctrl-C.
pub async fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Command::Sort(sort_args) => run_sort(&sort_args),
        Command::Serve(serve_args) => run_serve(&serve_args).await,
    }
}

fn run_sort(args: &SortArgs) -> Result<()> {
    let request = read_request(&args.tasks)?;
    let tasks = TaskSet::try_from(request)
        .with_context(|| format!("validating tasks from {}", args.tasks))?;
    debug!(tasks = tasks.len(), "loaded task set");

    let sorted = GraphTaskService::new()
        .sort_tasks(&tasks)
        .with_context(|| format!("sorting tasks from {}", args.tasks))?;
    let rendered = render::render(&sorted, args.format)?;

    match args.output {
        Some(ref path) => {
            fs::write(path, rendered).with_context(|| format!("writing output to {path}"))?;
            info!(path = %path, tasks = sorted.len(), "wrote sorted tasks");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

async fn run_serve(args: &ServeArgs) -> Result<()> {
    let mut config = load_or_default(args.config.as_deref().map(Path::new))
        .context("loading server config")?;

    if let Some(ref bind) = args.bind {
        config = config.with_bind_addr(parse_bind_addr(bind)?);
    }

    let service: Arc<dyn TaskService> = Arc::new(GraphTaskService::new());
    server::serve(&config, service).await?;
    Ok(())
}

fn read_request(source: &str) -> Result<TasksRequest> {
    if source == "-" {
        return load_tasks_from_reader(std::io::stdin().lock())
            .context("reading tasks from stdin");
    }
    load_tasks_from_path(source).with_context(|| format!("reading tasks from {source}"))
}
