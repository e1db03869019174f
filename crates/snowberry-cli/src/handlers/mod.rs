//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(resolver: &PathResolver, ...) -> Result<()>`
//! - Thin wrappers that call the resolver and format output for the terminal
//! - Rendering is split into a `render` function so tests can check output

pub mod files;
pub mod find_image;
pub mod paths;
