//! Top-level import name discovery.
//!
//! Declared names come from `top_level.txt`. When that is absent, names are
//! inferred from the installed file list: the first directory of every
//! nested path, or the module name of every file at the top level.

use std::collections::BTreeSet;

/// Source and bytecode suffixes, stripped whole.
const MODULE_SUFFIXES: &[&str] = &[".py", ".pyw", ".pyc"];

/// Extension module suffixes; the module name ends at the first `.`.
const EXTENSION_SUFFIXES: &[&str] = &[".so", ".pyd"];

/// Whitespace-separated names in a `top_level.txt` file.
pub fn parse_top_level(text: &str) -> BTreeSet<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Infer importable top-level names from installed file paths.
pub fn infer_top_level<I, S>(paths: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .filter_map(|path| top_level_name(path.as_ref()))
        .collect()
}

/// The importable top-level name a single installed path contributes.
///
/// Names containing a `.` (metadata directories, `..`, data files) are not
/// importable and yield `None`, as does `__pycache__`.
fn top_level_name(path: &str) -> Option<String> {
    let mut parts = path.split('/').filter(|part| !part.is_empty() && *part != ".");
    let first = parts.next()?;
    let name = if parts.next().is_some() {
        first
    } else {
        module_name(first).unwrap_or(first)
    };

    if name.is_empty() || name.contains('.') || name == "__pycache__" {
        return None;
    }
    Some(name.to_string())
}

/// Module name of a file, if its suffix marks it as importable.
fn module_name(file_name: &str) -> Option<&str> {
    if let Some(stem) = MODULE_SUFFIXES
        .iter()
        .find_map(|suffix| file_name.strip_suffix(suffix))
    {
        return Some(stem);
    }
    EXTENSION_SUFFIXES
        .iter()
        .any(|suffix| file_name.ends_with(suffix))
        .then(|| file_name.split('.').next().unwrap_or(file_name))
}
