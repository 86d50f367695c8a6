//! mapping — in-memory key/value tree addressed by dotted paths.
//!
//! Semantics:
//! - get(): value at the path; None for a missing segment or an Undefined value.
//! - has(): path fully walkable and final value is not Undefined (Null counts).
//! - has_own(): every segment exists as a member (Undefined/Null count).
//! - del()/del_many(): remove named paths; clear() removes everything but only
//!   with DelOptions { force: true }.
//! - union(): ordered-set append, result is always an array.
//!
//! Every set/has/del publishes an Event through the mapping's SubRegistry.

mod path;
mod union;

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::error::{Result, StoreError, FORCE_REQUIRED_MSG};
use crate::subs::{callback, Event, EventKind, SubRegistry, SubscriptionHandle};
use crate::value::{Map, Value};

/// Options for a full clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DelOptions {
    pub force: bool,
}

impl DelOptions {
    pub fn force() -> Self {
        Self { force: true }
    }
}

pub struct PathMapping {
    data: Map,
    subs: Arc<SubRegistry>,
}

impl Default for PathMapping {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PathMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathMapping")
            .field("data", &self.data)
            .field("subscribers", &self.subs.len())
            .finish()
    }
}

impl PathMapping {
    pub fn new() -> Self {
        Self::from_map(Map::new())
    }

    pub fn from_map(data: Map) -> Self {
        Self {
            data,
            subs: SubRegistry::new(),
        }
    }

    pub fn data(&self) -> &Map {
        &self.data
    }

    pub fn into_inner(self) -> Map {
        self.data
    }

    /// Replace the whole content; returns the previous one. No events.
    pub fn reset(&mut self, data: Map) -> Map {
        std::mem::replace(&mut self.data, data)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        Value::Object(self.data.clone()).to_json()
    }

    /// Subscribe to `kind` events. Dropping the handle unsubscribes.
    pub fn subscribe<F>(&self, kind: EventKind, f: F) -> SubscriptionHandle
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.subs.subscribe(kind, callback(f))
    }

    // ----- set -----

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        if self.subs.has_subscribers(EventKind::Set) {
            path::assign(&mut self.data, key, value.clone());
            self.subs.publish(&Event::Set {
                key: key.to_string(),
                value,
            });
        } else {
            path::assign(&mut self.data, key, value);
        }
    }

    /// Each top-level key of `map` is applied with set(), in map order.
    pub fn set_map(&mut self, map: Map) {
        for (k, v) in map {
            self.set(&k, v);
        }
    }

    pub fn set_maps<I>(&mut self, maps: I)
    where
        I: IntoIterator<Item = Map>,
    {
        for m in maps {
            self.set_map(m);
        }
    }

    // ----- read -----

    pub fn get(&self, key: &str) -> Option<&Value> {
        path::lookup(&self.data, key).filter(|v| !v.is_undefined())
    }

    pub fn has(&self, key: &str) -> bool {
        let present = self.get(key).is_some();
        self.subs.publish(&Event::Has {
            key: key.to_string(),
            present,
        });
        present
    }

    pub fn has_own(&self, key: &str) -> bool {
        path::lookup(&self.data, key).is_some()
    }

    // ----- delete -----

    /// Delete one path. Returns true if a member was removed.
    pub fn del(&mut self, key: &str) -> bool {
        let removed = path::remove(&mut self.data, key);
        debug!("del '{}': removed={}", key, removed);
        self.subs.publish(&Event::Del {
            keys: vec![key.to_string()],
        });
        removed
    }

    /// Delete several paths in order; returns how many were actually removed.
    pub fn del_many<I, S>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut removed = 0;
        for k in keys {
            if self.del(k.as_ref()) {
                removed += 1;
            }
        }
        removed
    }

    /// Remove every top-level key. Refuses unless `opts.force` is set.
    pub fn clear(&mut self, opts: DelOptions) -> Result<Vec<String>> {
        if !opts.force {
            return Err(StoreError::InvalidOperation(FORCE_REQUIRED_MSG.to_string()));
        }
        let keys: Vec<String> = self.data.keys().cloned().collect();
        self.data.clear();
        debug!("clear: removed {} top-level key(s)", keys.len());
        self.subs.publish(&Event::Del { keys: keys.clone() });
        Ok(keys)
    }

    // ----- union -----

    pub fn union(&mut self, key: &str, value: impl Into<Value>) {
        let merged = union::union_values(path::lookup(&self.data, key), value.into());
        self.set(key, Value::Array(merged));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clear_without_force_is_rejected() {
        let mut m = PathMapping::new();
        m.set("a", "b");
        let err = m.clear(DelOptions::default()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidOperation(_)));
        assert_eq!(err.to_string(), FORCE_REQUIRED_MSG);
        assert!(m.has_own("a"));
    }

    #[test]
    fn reset_swaps_content() {
        let mut m = PathMapping::new();
        m.set("old", 1i64);
        let prev = m.reset(Map::new());
        assert!(prev.contains_key("old"));
        assert!(m.is_empty());
    }

    #[test]
    fn to_json_drops_undefined() {
        let mut m = PathMapping::new();
        m.set("a", "b");
        m.set("u", Value::Undefined);
        assert_eq!(m.to_json(), json!({"a": "b"}));
        assert_eq!(m.len(), 2);
    }
}
