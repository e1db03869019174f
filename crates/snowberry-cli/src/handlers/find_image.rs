//! Find-image command handler.

use anyhow::{Result, bail};

use snowberry_core::paths::{Host, IMAGE_EXTENSIONS, PathResolver};

/// Execute the find-image command.
///
/// Prints the bitmap's path, or fails if no search path has it.
pub fn execute<H: Host>(resolver: &PathResolver<H>, name: &str, json: bool) -> Result<()> {
    let Some(path) = resolver.find_image(name)? else {
        bail!(
            "No bitmap named '{name}' ({}) in the graphics search paths",
            IMAGE_EXTENSIONS.join(", ")
        );
    };

    if json {
        println!("{}", serde_json::to_string(&path)?);
    } else {
        println!("{}", path.display());
    }
    Ok(())
}
