// src/render/mod.rs

//! Renderers over an ordered task sequence.
//!
//! - [`response`] maps tasks to `{name, command}` pairs for JSON transport.
//! - [`script`] joins commands into an executable bash script.
//!
//! Both preserve the order produced by [`crate::dag::sort`].

pub mod response;
pub mod script;

pub use response::{TaskResponse, to_responses};
pub use script::{SCRIPT_HEADER, render_script};

use crate::errors::Result;
use crate::task::Task;
use crate::types::OutputFormat;

/// Render `tasks` in the requested output format.
pub fn render(tasks: &[Task], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&to_responses(tasks))?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Script => Ok(render_script(tasks)),
    }
}
