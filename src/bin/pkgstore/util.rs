use anyhow::{Context, Result};

use PkgStore::{ManifestStore, StoreOptions, Value};

use super::cli::Location;

pub fn open_store(loc: Location) -> Result<ManifestStore> {
    let opts = StoreOptions {
        cwd: loc.cwd,
        path: loc.path,
    };
    let shown = opts.clone();
    ManifestStore::with_options(opts).with_context(|| format!("open manifest ({:?})", shown))
}

/// CLI value argument: JSON literal if it parses, otherwise a plain string.
/// `true`, `42`, `["a"]`, `{"x":1}` are JSON; `hello` becomes "hello".
pub fn parse_value_arg(arg: &str) -> Value {
    serde_json::from_str::<Value>(arg).unwrap_or_else(|_| Value::from(arg))
}

pub fn save(store: &ManifestStore) -> Result<()> {
    store
        .save()
        .with_context(|| format!("save {}", store.path().display()))
}
