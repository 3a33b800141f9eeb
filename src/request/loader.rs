// src/request/loader.rs

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::errors::Result;
use crate::request::model::TasksRequest;

/// Load a task file and return the raw, unvalidated request.
///
/// Files with a `.json` extension are parsed as JSON; anything else is parsed
/// as TOML with the same shape (`[[tasks]]` tables). Use
/// `TaskSet::try_from` to validate the result.
pub fn load_tasks_from_path(path: impl AsRef<Path>) -> Result<TasksRequest> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let request: TasksRequest = if is_json {
        serde_json::from_str(&contents)?
    } else {
        toml::from_str(&contents)?
    };

    Ok(request)
}

/// Parse a JSON request from `reader` (used for `--tasks -`).
pub fn load_tasks_from_reader(mut reader: impl Read) -> Result<TasksRequest> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(serde_json::from_str(&contents)?)
}
