//! In-process subscriptions (observer registry) for PathMapping.
//!
//! Scope:
//! - Subscribe by event kind (`set`, `has`, `del`).
//! - Events are delivered synchronously inside the triggering call, in the
//!   order the mapping applied the changes.
//! - Drop of SubscriptionHandle unsubscribes.
//!
//! Notes:
//! - Callbacks run outside the registry lock, so a callback may subscribe or
//!   drop handles without deadlocking. It cannot touch the mapping itself
//!   (the mapping is mutably borrowed for the duration of the call).
//! - Subscribers of the same kind are called in subscription order.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crate::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Set,
    Has,
    Del,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Set => "set",
            EventKind::Has => "has",
            EventKind::Del => "del",
        }
    }
}

/// A single notification emitted by the mapping:
/// - Set: key (dotted path as given) and the value written
/// - Has: key queried and the answer returned
/// - Del: deleted keys (one for a path delete, all top-level keys for a forced clear)
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Set { key: String, value: Value },
    Has { key: String, present: bool },
    Del { keys: Vec<String> },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Set { .. } => EventKind::Set,
            Event::Has { .. } => EventKind::Has,
            Event::Del { .. } => EventKind::Del,
        }
    }
}

pub type Callback = Arc<dyn Fn(&Event) + Send + Sync + 'static>;

#[derive(Default)]
struct SubInner {
    next_id: u64,
    subs: BTreeMap<u64, (EventKind, Callback)>, // id -> (kind, cb); BTreeMap keeps subscription order
}

/// Subscription registry (held inside PathMapping).
pub struct SubRegistry {
    inner: Mutex<SubInner>,
}

impl SubRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(SubInner::default()),
        })
    }

    // Callbacks never run under the lock; a poisoned guard still holds consistent data.
    fn lock(&self) -> MutexGuard<'_, SubInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Subscribe for events of `kind`.
    /// Returns a handle; dropping it unsubscribes.
    pub fn subscribe(self: &Arc<Self>, kind: EventKind, cb: Callback) -> SubscriptionHandle {
        let mut g = self.lock();
        let id = g.next_id;
        g.next_id = g.next_id.wrapping_add(1);
        g.subs.insert(id, (kind, cb));
        drop(g);
        SubscriptionHandle {
            id,
            reg: Arc::downgrade(self),
        }
    }

    /// Publish an event to all subscribers of its kind.
    pub fn publish(&self, ev: &Event) {
        let kind = ev.kind();
        let callbacks: Vec<Callback> = {
            let g = self.lock();
            g.subs
                .values()
                .filter(|(k, _)| *k == kind)
                .map(|(_, cb)| cb.clone())
                .collect()
        };
        // Execute outside the lock
        for cb in callbacks {
            cb(ev);
        }
    }

    /// Cheap check used to skip building events nobody listens to.
    pub fn has_subscribers(&self, kind: EventKind) -> bool {
        self.lock().subs.values().any(|(k, _)| *k == kind)
    }

    pub fn len(&self) -> usize {
        self.lock().subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn unsubscribe(&self, id: u64) {
        let mut g = self.lock();
        g.subs.remove(&id);
    }
}

/// RAII handle: unsubscribes on drop.
pub struct SubscriptionHandle {
    id: u64,
    reg: Weak<SubRegistry>,
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        if let Some(reg) = self.reg.upgrade() {
            reg.unsubscribe(self.id);
        }
    }
}

/// Public helper for building callbacks.
pub fn callback<F>(f: F) -> Callback
where
    F: Fn(&Event) + Send + Sync + 'static,
{
    Arc::new(f)
}
