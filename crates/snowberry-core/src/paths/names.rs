//! File name helpers.

use std::path::Path;

/// Returns the file name of `path` without directories and without any
/// extension. Everything after the first dot counts as the extension.
pub fn base_name_without_extension(path: impl AsRef<Path>) -> String {
    let base = path
        .as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match base.find('.') {
        Some(pos) => base[..pos].to_string(),
        None => base,
    }
}

/// Checks if the file name of `file_name` has the given extension.
///
/// The comparison ignores case. A name that is only the extension (`.png`),
/// a hidden file (`.x.png`) or an editor backup (`#x.png`) does not match.
pub fn has_extension(extension: &str, file_name: &str) -> bool {
    let Some(name) = Path::new(file_name).file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    let suffix = format!(".{}", extension.trim_start_matches('.').to_lowercase());

    name.strip_suffix(&suffix)
        .is_some_and(|stem| !stem.is_empty() && !stem.starts_with(['.', '#']))
}

/// Quote a file name so it can be passed as one command line option.
pub fn quote_for_command_line(file_name: &str) -> String {
    format!("\"{}\"", file_name.replace('"', "\"\""))
}
