use std::str::FromStr;

/// How an ordered task sequence is rendered for output.
///
/// - `Json`: an array of `{name, command}` pairs.
/// - `Script`: a bash script with one command per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Script,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Json
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "script" | "bash" => Ok(OutputFormat::Script),
            other => Err(format!(
                "invalid output format: {other} (expected \"json\" or \"script\")"
            )),
        }
    }
}
