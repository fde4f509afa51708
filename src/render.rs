//! Output rendering
//!
//! Turns a finished run into Markdown or JSON and writes it out.

use std::path::Path;

use crate::config::OutputFormat;
use crate::core::script::{GeneratedScript, RunOutcome};
use crate::utils::error::{GenieError, Result};

/// Heading above the rendered scripts
pub const SCRIPTS_HEADING: &str = "# Your AI-Generated Video Script(s)";

/// Render scripts as one Markdown document, in order
///
/// An empty list renders as an empty string.
pub fn render_markdown(scripts: &[GeneratedScript]) -> String {
    if scripts.is_empty() {
        return String::new();
    }

    let sections: Vec<String> = scripts
        .iter()
        .map(|s| format!("## Script for: \"{}\"\n\n{}", s.craft_type, s.script.trim_end()))
        .collect();

    format!("{}\n\n{}\n", SCRIPTS_HEADING, sections.join("\n\n---\n\n"))
}

/// Render the whole outcome as pretty JSON
pub fn render_json(outcome: &RunOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

/// Render in the requested format
pub fn render(outcome: &RunOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(&outcome.scripts)),
        OutputFormat::Json => render_json(outcome),
    }
}

/// Write rendered output to `path`, or stdout when `None`
pub async fn write_output(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => tokio::fs::write(path, rendered)
            .await
            .map_err(|e| GenieError::output(format!("Failed to write {:?}: {}", path, e))),
        None => {
            if !rendered.is_empty() {
                print!("{}", rendered);
            }
            Ok(())
        }
    }
}
