//! Core metadata header parsing (`METADATA` / `PKG-INFO`).
//!
//! Only the RFC 822 style header block is read; the body (long description)
//! after the first blank line is ignored.

/// Fields of interest from a core metadata file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreMetadata {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Parse the `Name` and `Version` headers. The first occurrence of each wins.
pub fn parse_core_metadata(text: &str) -> CoreMetadata {
    let mut metadata = CoreMetadata::default();

    for line in text.lines() {
        if line.trim().is_empty() {
            break;
        }
        // Continuation of a folded header
        if line.starts_with([' ', '\t']) {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        let slot = if key.trim().eq_ignore_ascii_case("name") {
            &mut metadata.name
        } else if key.trim().eq_ignore_ascii_case("version") {
            &mut metadata.version
        } else {
            continue;
        };
        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }

    metadata
}
