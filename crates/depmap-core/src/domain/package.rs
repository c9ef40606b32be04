//! Package domain types.
//!
//! A [`PackageRecord`] ties an installable package name (something you can
//! pass to `pip install`) to the import names it provides once installed.
//! These types are independent of how the mapping was obtained; see
//! [`crate::ports::DistributionSourcePort`] for the metadata side.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─────────────────────────────────────────────────────────────────────────────
// Provenance
// ─────────────────────────────────────────────────────────────────────────────

/// Where a set of import names associated with a package came from.
///
/// Tracking this is mostly useful when debugging a surprising used/unused
/// verdict: an `EnvironmentDiscovered` mapping is authoritative, a
/// `DeclaredIdentity` mapping is a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Provenance {
    /// The package name itself, assumed to be importable.
    #[serde(rename = "identity")]
    DeclaredIdentity,
    /// Distribution metadata found in the inspected environment.
    #[serde(rename = "local_env")]
    EnvironmentDiscovered,
}

impl Provenance {
    /// Stable identifier used in serialized output and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeclaredIdentity => "identity",
            Self::EnvironmentDiscovered => "local_env",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Name normalization
// ─────────────────────────────────────────────────────────────────────────────

/// Perform standard normalization of package names.
///
/// A package can be declared with one spelling (`Typing-Extensions`) and show
/// up in installed metadata with another (`typing_extensions`). Every
/// comparison between names from different sources goes through here.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace('-', "_")
}

// ─────────────────────────────────────────────────────────────────────────────
// PackageRecord
// ─────────────────────────────────────────────────────────────────────────────

/// An installable package and the import names it provides.
///
/// `import_names` is the union of every set in `mappings`. It is kept up to
/// date by every mutator and is never part of the serialized form, which is
/// just `{ "name": ..., "mappings": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    name: String,
    mappings: BTreeMap<Provenance, BTreeSet<String>>,
    import_names: BTreeSet<String>,
}

impl PackageRecord {
    /// Create a record with no known import names.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mappings: BTreeMap::new(),
            import_names: BTreeSet::new(),
        }
    }

    /// Create a record holding a single provenance mapping.
    pub fn with_mapping<I, S>(name: impl Into<String>, provenance: Provenance, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut record = Self::new(name);
        record.add_import_names(names, provenance);
        record
    }

    fn from_mappings(name: String, mappings: BTreeMap<Provenance, BTreeSet<String>>) -> Self {
        let import_names = mappings.values().flatten().cloned().collect();
        Self {
            name,
            mappings,
            import_names,
        }
    }

    /// Factory for an identity-mapped record: `foo` is assumed importable as `foo`.
    pub fn identity_mapping(name: impl Into<String>) -> Self {
        let mut record = Self::new(name);
        record.add_identity_import();
        record
    }

    /// The package name, spelled as declared or as found in metadata.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The package name in its normalized form.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Import names grouped by the provenance that contributed them.
    pub const fn mappings(&self) -> &BTreeMap<Provenance, BTreeSet<String>> {
        &self.mappings
    }

    /// All import names provided by this package, regardless of provenance.
    pub const fn import_names(&self) -> &BTreeSet<String> {
        &self.import_names
    }

    /// Provenances that have contributed to this record.
    pub fn provenances(&self) -> impl Iterator<Item = Provenance> + '_ {
        self.mappings.keys().copied()
    }

    /// Add import names provided by this package under `provenance`.
    ///
    /// Repeating an identical call changes nothing.
    pub fn add_import_names<I, S>(&mut self, names: I, provenance: Provenance)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.mappings.entry(provenance).or_default();
        for name in names {
            let name = name.into();
            self.import_names.insert(name.clone());
            entry.insert(name);
        }
    }

    /// Add the normalized package name as an import name.
    ///
    /// This assumes that a package `foo` installed with `pip install foo`
    /// provides an import name `foo`. That does not always hold, but it is
    /// the best guess available when no metadata exists.
    pub fn add_identity_import(&mut self) {
        let identity = self.normalized_name();
        self.add_import_names([identity], Provenance::DeclaredIdentity);
    }

    /// Return `true` iff any of `imported_names` is provided by this package.
    pub fn is_used<I, S>(&self, imported_names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        imported_names
            .into_iter()
            .any(|name| self.import_names.contains(name.as_ref()))
    }
}

impl Serialize for PackageRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PackageRecord", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("mappings", &self.mappings)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for PackageRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Shape {
            name: String,
            #[serde(default)]
            mappings: BTreeMap<Provenance, BTreeSet<String>>,
        }

        let shape = Shape::deserialize(deserializer)?;
        Ok(Self::from_mappings(shape.name, shape.mappings))
    }
}
