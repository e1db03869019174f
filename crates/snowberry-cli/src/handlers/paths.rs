//! Paths command handler.
//!
//! Displays the home directory and every category's search paths.
//! This is the "golden truth" tool for path resolution issues.

use anyhow::Result;

use snowberry_core::paths::{Host, PathResolver};

/// Execute the paths command.
pub fn execute<H: Host>(resolver: &PathResolver<H>, json: bool) -> Result<()> {
    println!("{}", render(resolver, json)?);
    Ok(())
}

/// Render the report as `key = value` lines or pretty JSON.
pub fn render<H: Host>(resolver: &PathResolver<H>, json: bool) -> Result<String> {
    let report = resolver.report()?;
    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.to_string())
    }
}
