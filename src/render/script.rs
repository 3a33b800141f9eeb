// src/render/script.rs

use crate::task::Task;

/// Interpreter line at the top of every rendered script.
pub const SCRIPT_HEADER: &str = "#!/usr/bin/env bash";

/// Render the commands of `tasks`, in order, as a bash script.
///
/// Output is the header, a blank line, then one `command\n` per task.
/// Commands are emitted verbatim with no escaping.
pub fn render_script(tasks: &[Task]) -> String {
    let body_len: usize = tasks.iter().map(|t| t.command.len() + 1).sum();
    let mut out = String::with_capacity(SCRIPT_HEADER.len() + 2 + body_len);

    out.push_str(SCRIPT_HEADER);
    out.push_str("\n\n");
    for task in tasks {
        out.push_str(&task.command);
        out.push('\n');
    }

    out
}
