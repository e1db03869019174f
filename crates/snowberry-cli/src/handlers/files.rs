//! Files command handler.
//!
//! Lists every file of one category in search order, with files shadowed by
//! a higher-precedence directory already filtered out.

use anyhow::Result;

use snowberry_core::Category;
use snowberry_core::paths::{Host, PathResolver};

/// Execute the files command.
pub fn execute<H: Host>(resolver: &PathResolver<H>, category: Category, json: bool) -> Result<()> {
    let output = render(resolver, category, json)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// One path per line, or a JSON array.
pub fn render<H: Host>(resolver: &PathResolver<H>, category: Category, json: bool) -> Result<String> {
    let files = resolver.list_files(category)?;
    if json {
        return Ok(serde_json::to_string_pretty(&files)?);
    }

    Ok(files
        .iter()
        .map(|f| f.display().to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
