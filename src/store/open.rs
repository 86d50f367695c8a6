//! store/open — resolve the manifest location and load it.
//!
//! Resolution order:
//!   cwd  = options.cwd, else the positional cwd, else the process cwd
//!          (or, if that is unavailable, the directory of an absolute path);
//!          made absolute and lexically normalized.
//!   path = options.path (relative => against cwd), else <cwd>/<config.filename>.
//!
//! Load:
//! - missing file => empty mapping (not an error);
//! - unreadable file, invalid JSON or a non-object top level => StoreError::Read.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{StoreConfig, StoreOptions};
use crate::error::{Result, StoreError};
use crate::mapping::PathMapping;
use crate::util::{absolutize, normalize};
use crate::value::{Map, Value};

use super::ManifestStore;

impl ManifestStore {
    /// Open `<cwd>/package.json` (or the configured filename).
    pub fn open<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        Self::create(cwd, StoreOptions::default())
    }

    /// Open using options only (`cwd` and/or `path`).
    pub fn with_options(opts: StoreOptions) -> Result<Self> {
        Self::open_with_config(opts, StoreConfig::from_env())
    }

    /// Positional cwd plus options; `opts.cwd`, when set, takes precedence.
    pub fn create<P: AsRef<Path>>(cwd: P, mut opts: StoreOptions) -> Result<Self> {
        if opts.cwd.is_none() {
            opts.cwd = Some(cwd.as_ref().to_path_buf());
        }
        Self::open_with_config(opts, StoreConfig::from_env())
    }

    pub fn open_with_config(opts: StoreOptions, config: StoreConfig) -> Result<Self> {
        let (cwd, path) = resolve_paths(&opts, &config)?;
        debug!("open: cwd={} path={}", cwd.display(), path.display());
        let map = read_manifest(&path)?;
        Ok(Self {
            cwd,
            path,
            data: PathMapping::from_map(map),
            config,
        })
    }

    /// Re-read the file into the mapping (subscriptions are kept).
    /// On error the in-memory data is left untouched.
    pub fn reload(&mut self) -> Result<()> {
        let map = read_manifest(&self.path)?;
        self.data.reset(map);
        Ok(())
    }
}

pub(crate) fn resolve_paths(opts: &StoreOptions, config: &StoreConfig) -> Result<(PathBuf, PathBuf)> {
    resolve_with(opts, config, || {
        std::env::current_dir().map_err(|e| StoreError::read(".", format!("current dir: {e}")))
    })
}

// The process cwd is only required when something relative needs it.
fn resolve_with<F>(opts: &StoreOptions, config: &StoreConfig, process_cwd: F) -> Result<(PathBuf, PathBuf)>
where
    F: Fn() -> Result<PathBuf>,
{
    let cwd = match &opts.cwd {
        Some(dir) if dir.is_absolute() => normalize(dir),
        Some(dir) => absolutize(&process_cwd()?, dir),
        None => match (&opts.path, process_cwd()) {
            (_, Ok(dir)) => normalize(&dir),
            // an absolute path does not need the process cwd; fall back to its directory
            (Some(p), Err(_)) if p.is_absolute() => normalize(p.parent().unwrap_or(p)),
            (_, Err(e)) => return Err(e),
        },
    };
    let path = match &opts.path {
        Some(p) => absolutize(&cwd, p),
        None => cwd.join(&config.filename),
    };
    Ok((cwd, path))
}

pub(crate) fn read_manifest(path: &Path) -> Result<Map> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("manifest {} not found, starting empty", path.display());
            return Ok(Map::new());
        }
        Err(e) => return Err(StoreError::read(path, e)),
    };
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| StoreError::read(path, format!("invalid JSON: {e}")))?;
    match value {
        Value::Object(map) => {
            debug!("loaded {} ({} top-level key(s))", path.display(), map.len());
            Ok(map)
        }
        other => Err(StoreError::read(
            path,
            format!("expected a JSON object at top level, got {}", type_name(&other)),
        )),
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Undefined => "undefined",
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
