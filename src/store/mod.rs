//! store — ManifestStore: a PathMapping bound to one manifest file.
//!
//! Layout:
//! - open.rs  — path resolution, construction, load/reload
//! - save.rs  — save (sync), save_with (callback), unlink
//!
//! The store owns its mapping; all mapping operations are forwarded below so
//! callers can work with the store directly.

mod open;
mod save;

use std::path::{Path, PathBuf};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::mapping::{DelOptions, PathMapping};
use crate::subs::{Event, EventKind, SubscriptionHandle};
use crate::value::{Map, Value};

#[derive(Debug)]
pub struct ManifestStore {
    cwd: PathBuf,
    path: PathBuf,
    data: PathMapping,
    config: StoreConfig,
}

impl ManifestStore {
    /// Absolute working directory the store was resolved against.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Absolute manifest path; fixed for the lifetime of the store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn data(&self) -> &PathMapping {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut PathMapping {
        &mut self.data
    }

    pub fn subscribe<F>(&self, kind: EventKind, f: F) -> SubscriptionHandle
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.data.subscribe(kind, f)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.data.set(key, value)
    }

    pub fn set_map(&mut self, map: Map) {
        self.data.set_map(map)
    }

    pub fn set_maps<I>(&mut self, maps: I)
    where
        I: IntoIterator<Item = Map>,
    {
        self.data.set_maps(maps)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.data.has(key)
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.data.has_own(key)
    }

    pub fn del(&mut self, key: &str) -> bool {
        self.data.del(key)
    }

    pub fn del_many<I, S>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.data.del_many(keys)
    }

    pub fn clear(&mut self, opts: DelOptions) -> Result<Vec<String>> {
        self.data.clear(opts)
    }

    pub fn union(&mut self, key: &str, value: impl Into<Value>) {
        self.data.union(key, value)
    }
}
