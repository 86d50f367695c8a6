//! Centralized configuration for PkgStore.
//!
//! Two pieces:
//! - StoreConfig: tunables (manifest filename, indent, atomic save), readable
//!   from env via StoreConfig::from_env() and overridable with fluent setters.
//! - StoreOptions: where the manifest lives (`cwd` and/or explicit `path`).
//!
//! Defaults:
//! - filename = "package.json"
//! - indent = 2
//! - atomic_save = false (plain overwrite of the target file)

use std::path::PathBuf;

pub const DEFAULT_FILENAME: &str = "package.json";
pub const DEFAULT_INDENT: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Manifest file name used when no explicit path is given.
    /// Env: PKGSTORE_FILENAME (default "package.json")
    pub filename: String,

    /// Spaces per indentation level when saving.
    /// Env: PKGSTORE_INDENT (default 2)
    pub indent: usize,

    /// Write to `<path>.tmp` and rename over the target.
    /// Env: PKGSTORE_ATOMIC_SAVE (default false; "1|true|on|yes" => true)
    pub atomic_save: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            filename: DEFAULT_FILENAME.to_string(),
            indent: DEFAULT_INDENT,
            atomic_save: false,
        }
    }
}

fn env_flag(v: &str) -> bool {
    let s = v.trim().to_ascii_lowercase();
    s == "1" || s == "true" || s == "on" || s == "yes"
}

impl StoreConfig {
    /// Load configuration from environment variables; unset or malformed
    /// values keep their defaults.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("PKGSTORE_FILENAME") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.filename = s.to_string();
            }
        }

        if let Ok(v) = std::env::var("PKGSTORE_INDENT") {
            if let Ok(n) = v.trim().parse::<usize>() {
                cfg.indent = n;
            }
        }

        if let Ok(v) = std::env::var("PKGSTORE_ATOMIC_SAVE") {
            cfg.atomic_save = env_flag(&v);
        }

        cfg
    }

    pub fn with_filename<S: Into<String>>(mut self, name: S) -> Self {
        self.filename = name.into();
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_atomic_save(mut self, on: bool) -> Self {
        self.atomic_save = on;
        self
    }
}

/// Location of the manifest.
///
/// Resolution (see store::open):
/// - `path` set: used as is (relative paths are taken relative to `cwd`);
/// - otherwise `<cwd>/<filename>`;
/// - `cwd` unset: process current directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreOptions {
    pub cwd: Option<PathBuf>,
    pub path: Option<PathBuf>,
}

impl StoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cwd<P: Into<PathBuf>>(mut self, cwd: P) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn with_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.path = Some(path.into());
        self
    }
}
