//! Installed file listings.
//!
//! A distribution records the files it installed in one of three places,
//! tried in this order:
//!
//! - `RECORD` (dist-info): CSV rows of `path,hash,size`
//! - `installed-files.txt` (egg-info): paths relative to the egg-info directory
//! - `SOURCES.txt` (egg-info): paths relative to the source tree
//!
//! All functions here are pure; returned paths use `/` separators and are
//! relative to the directory that contains the metadata directory.

/// Paths listed in a `RECORD` file (the first CSV column of each row).
pub fn parse_record(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(first_csv_field)
        .filter(|path| !path.is_empty())
        .collect()
}

/// Paths listed in `installed-files.txt`, rebased onto the site directory.
///
/// Entries are relative to the egg-info directory named `egg_info_name`, so
/// `../foo/__init__.py` becomes `foo/__init__.py`.
pub fn parse_installed_files(text: &str, egg_info_name: &str) -> Vec<String> {
    non_blank_lines(text)
        .map(|line| normalize_relative(&format!("{egg_info_name}/{line}")))
        .collect()
}

/// Paths listed in `SOURCES.txt`.
pub fn parse_sources(text: &str) -> Vec<String> {
    non_blank_lines(text).map(str::to_string).collect()
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// First field of a CSV row, honoring double-quoted fields.
fn first_csv_field(row: &str) -> Option<String> {
    let row = row.trim_end_matches('\r');
    if row.is_empty() {
        return None;
    }

    let Some(quoted) = row.strip_prefix('"') else {
        return Some(row.split(',').next().unwrap_or_default().to_string());
    };

    let mut field = String::new();
    let mut chars = quoted.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '"' {
            // A doubled quote is an escaped quote; anything else ends the field
            if chars.peek() == Some(&'"') {
                chars.next();
                field.push('"');
            } else {
                break;
            }
        } else {
            field.push(c);
        }
    }
    Some(field)
}

/// Lexically resolve `.` and `..` components of a `/`-separated path.
///
/// Leading `..` components that cannot be cancelled are kept.
fn normalize_relative(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }
    parts.join("/")
}
