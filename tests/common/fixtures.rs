//! Test fixtures for creating fake virtualenvs on disk.
//!
//! A fake venv has a `pyvenv.cfg` marker and a single
//! `lib/python3.11/site-packages` directory that tests populate with
//! distribution metadata.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A throwaway virtualenv rooted in a temporary directory.
pub struct FakeVenv {
    root: TempDir,
}

impl FakeVenv {
    /// Creates an empty virtualenv with one site-packages directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        fs::write(root.path().join("pyvenv.cfg"), "home = /usr/bin\n")
            .expect("Failed to write pyvenv.cfg");
        fs::create_dir_all(root.path().join("lib/python3.11/site-packages"))
            .expect("Failed to create site-packages");
        Self { root }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn site_packages(&self) -> PathBuf {
        self.root.path().join("lib/python3.11/site-packages")
    }

    /// Installs a wheel-style distribution with a `top_level.txt`.
    ///
    /// Each import name also gets a `<name>.py` module next to it.
    pub fn install(&self, name: &str, imports: &[&str]) -> PathBuf {
        let dist_info = self.dist_info(name, "1.2.3");
        fs::write(dist_info.join("top_level.txt"), imports.join("\n"))
            .expect("Failed to write top_level.txt");
        for import in imports {
            fs::write(self.site_packages().join(format!("{import}.py")), "")
                .expect("Failed to write module");
        }
        dist_info
    }

    /// Installs a wheel-style distribution described only by its RECORD.
    pub fn install_with_record(&self, name: &str, record_paths: &[&str]) -> PathBuf {
        let dist_info = self.dist_info(name, "0.1.0");
        let record = record_paths
            .iter()
            .map(|path| format!("{path},sha256=abc,10\n"))
            .collect::<String>();
        fs::write(dist_info.join("RECORD"), record).expect("Failed to write RECORD");
        dist_info
    }

    /// Installs a distribution with core metadata but no file information.
    pub fn install_bare(&self, name: &str) -> PathBuf {
        self.dist_info(name, "0.0.1")
    }

    /// Installs a setuptools-style egg-info distribution.
    pub fn install_egg_info(&self, name: &str, installed_files: &[&str]) -> PathBuf {
        let egg_info = self
            .site_packages()
            .join(format!("{name}-1.0-py3.11.egg-info"));
        fs::create_dir_all(&egg_info).expect("Failed to create egg-info");
        fs::write(
            egg_info.join("PKG-INFO"),
            format!("Metadata-Version: 1.1\nName: {name}\nVersion: 1.0\n"),
        )
        .expect("Failed to write PKG-INFO");
        fs::write(egg_info.join("installed-files.txt"), installed_files.join("\n"))
            .expect("Failed to write installed-files.txt");
        egg_info
    }

    fn dist_info(&self, name: &str, version: &str) -> PathBuf {
        let dist_info = self
            .site_packages()
            .join(format!("{}-{version}.dist-info", name.replace('-', "_")));
        fs::create_dir_all(&dist_info).expect("Failed to create dist-info");
        fs::write(
            dist_info.join("METADATA"),
            format!("Metadata-Version: 2.1\nName: {name}\nVersion: {version}\n\nLong description.\n"),
        )
        .expect("Failed to write METADATA");
        dist_info
    }
}
