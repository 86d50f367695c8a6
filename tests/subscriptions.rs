use std::sync::{Arc, Mutex};

use serde_json::json;

use PkgStore::{DelOptions, Event, EventKind, Map, PathMapping, Value};

fn collect(m: &PathMapping, kind: EventKind) -> (Arc<Mutex<Vec<Event>>>, PkgStore::SubscriptionHandle) {
    let events: Arc<Mutex<Vec<Event>>> = Arc::new(Mutex::new(Vec::new()));
    let ev_clone = events.clone();
    let h = m.subscribe(kind, move |ev: &Event| {
        ev_clone.lock().unwrap().push(ev.clone());
    });
    (events, h)
}

fn obj(v: serde_json::Value) -> Map {
    match Value::from(v) {
        Value::Object(m) => m,
        _ => Map::new(),
    }
}

#[test]
fn set_events_follow_application_order() {
    let mut m = PathMapping::new();
    let (events, _h) = collect(&m, EventKind::Set);

    m.set_maps(vec![obj(json!({"a": "b"})), obj(json!({"c": "d"}))]);

    let got = events.lock().unwrap().clone();
    assert_eq!(
        got,
        vec![
            Event::Set { key: "a".into(), value: Value::from("b") },
            Event::Set { key: "c".into(), value: Value::from("d") },
        ]
    );
}

#[test]
fn has_event_carries_answer() {
    let mut m = PathMapping::new();
    m.set("x", Value::Null);
    let (events, _h) = collect(&m, EventKind::Has);

    assert!(m.has("x"));
    assert!(!m.has("y"));

    let got = events.lock().unwrap().clone();
    assert_eq!(
        got,
        vec![
            Event::Has { key: "x".into(), present: true },
            Event::Has { key: "y".into(), present: false },
        ]
    );
}

#[test]
fn del_events_per_key_and_for_clear() {
    let mut m = PathMapping::new();
    m.set("a", 1i64);
    m.set("b", 2i64);
    m.set("c", 3i64);
    let (events, _h) = collect(&m, EventKind::Del);

    m.del_many(["a", "b"]);
    m.set("d", 4i64);
    m.clear(DelOptions::force()).unwrap();

    let got = events.lock().unwrap().clone();
    assert_eq!(
        got,
        vec![
            Event::Del { keys: vec!["a".into()] },
            Event::Del { keys: vec!["b".into()] },
            Event::Del { keys: vec!["c".into(), "d".into()] },
        ]
    );
}

#[test]
fn union_publishes_set_with_merged_array() {
    let mut m = PathMapping::new();
    let (events, _h) = collect(&m, EventKind::Set);
    m.union("kw", "x");
    m.union("kw", "y");
    let got = events.lock().unwrap().clone();
    assert_eq!(got.len(), 2);
    assert_eq!(
        got[1],
        Event::Set { key: "kw".into(), value: Value::from(json!(["x", "y"])) }
    );
}

#[test]
fn drop_handle_unsubscribes() {
    let mut m = PathMapping::new();
    let (events, h) = collect(&m, EventKind::Set);
    m.set("a", 1i64);
    drop(h);
    m.set("b", 2i64);
    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn kinds_are_isolated() {
    let mut m = PathMapping::new();
    let (sets, _h1) = collect(&m, EventKind::Set);
    let (dels, _h2) = collect(&m, EventKind::Del);
    m.set("a", 1i64);
    let _ = m.has("a");
    assert_eq!(sets.lock().unwrap().len(), 1);
    assert!(dels.lock().unwrap().is_empty());
    assert_eq!(sets.lock().unwrap()[0].kind(), EventKind::Set);
    assert_eq!(EventKind::Del.as_str(), "del");
}
