//! mapping/path — dotted-path walking over `Map`/`Value` trees.
//!
//! A path is split on every literal '.'; each segment is a plain member name.
//! On arrays a segment is accepted as an element index (canonical decimal,
//! no sign, no leading zeros).

use crate::value::{Map, Value};

pub(crate) fn split(path: &str) -> Vec<&str> {
    path.split('.').collect()
}

pub(crate) fn parse_index(seg: &str) -> Option<usize> {
    if seg.is_empty() || !seg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if seg.len() > 1 && seg.starts_with('0') {
        return None;
    }
    seg.parse().ok()
}

fn child<'a>(v: &'a Value, seg: &str) -> Option<&'a Value> {
    match v {
        Value::Object(m) => m.get(seg),
        Value::Array(a) => parse_index(seg).and_then(|i| a.get(i)),
        _ => None,
    }
}

fn child_mut<'a>(v: &'a mut Value, seg: &str) -> Option<&'a mut Value> {
    match v {
        Value::Object(m) => m.get_mut(seg),
        Value::Array(a) => parse_index(seg).and_then(move |i| a.get_mut(i)),
        _ => None,
    }
}

/// Raw lookup: the stored value (possibly `Undefined`), or None if a segment is missing.
pub(crate) fn lookup<'a>(root: &'a Map, path: &str) -> Option<&'a Value> {
    let mut segs = path.split('.');
    let first = segs.next()?;
    let mut cur = root.get(first)?;
    for seg in segs {
        cur = child(cur, seg)?;
    }
    Some(cur)
}

fn lookup_mut<'a>(root: &'a mut Map, segs: &[&str]) -> Option<&'a mut Value> {
    let (first, rest) = segs.split_first()?;
    let mut cur = root.get_mut(*first)?;
    for seg in rest {
        cur = child_mut(cur, seg)?;
    }
    Some(cur)
}

/// Write `value` at `path`, creating (or replacing non-object) intermediates with objects.
pub(crate) fn assign(root: &mut Map, path: &str, value: Value) {
    let segs = split(path);
    assign_in(root, &segs, value);
}

fn assign_in(map: &mut Map, segs: &[&str], value: Value) {
    match segs {
        [] => {}
        [last] => {
            map.insert((*last).to_string(), value);
        }
        [head, rest @ ..] => {
            let slot = map.entry((*head).to_string()).or_insert(Value::Undefined);
            assign_value(slot, rest, value);
        }
    }
}

// `segs` is never empty here.
fn assign_value(slot: &mut Value, segs: &[&str], value: Value) {
    if let Value::Array(items) = &mut *slot {
        if let Some(i) = parse_index(segs[0]).filter(|i| *i < items.len()) {
            if segs.len() == 1 {
                items[i] = value;
            } else {
                assign_value(&mut items[i], &segs[1..], value);
            }
            return;
        }
    }
    if !slot.is_object() {
        *slot = Value::object();
    }
    if let Value::Object(map) = slot {
        assign_in(map, segs, value);
    }
}

/// Remove the member at `path`. Object members are shift-removed (order of the
/// rest is kept); array elements are removed and later elements move up.
pub(crate) fn remove(root: &mut Map, path: &str) -> bool {
    let segs = split(path);
    let Some((last, parents)) = segs.split_last() else {
        return false;
    };
    if parents.is_empty() {
        return root.shift_remove(*last).is_some();
    }
    match lookup_mut(root, parents) {
        Some(Value::Object(m)) => m.shift_remove(*last).is_some(),
        Some(Value::Array(a)) => match parse_index(last) {
            Some(i) if i < a.len() => {
                a.remove(i);
                true
            }
            _ => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(v: serde_json::Value) -> Map {
        match Value::from(v) {
            Value::Object(m) => m,
            _ => Map::new(),
        }
    }

    #[test]
    fn index_parsing() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("12"), Some(12));
        assert_eq!(parse_index("01"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("x"), None);
    }

    #[test]
    fn lookup_through_arrays() {
        let m = map(json!({"files": [{"name": "a"}, {"name": "b"}]}));
        assert_eq!(lookup(&m, "files.1.name").unwrap(), &json!("b"));
        assert!(lookup(&m, "files.2.name").is_none());
        assert!(lookup(&m, "files.x").is_none());
    }

    #[test]
    fn assign_replaces_scalar_intermediate() {
        let mut m = map(json!({"a": "scalar"}));
        assign(&mut m, "a.b", Value::from(1i64));
        assert_eq!(Value::Object(m), json!({"a": {"b": 1}}));
    }

    #[test]
    fn assign_into_array_element() {
        let mut m = map(json!({"a": [{"x": 1}, {"x": 2}]}));
        assign(&mut m, "a.1.x", Value::from(5i64));
        assign(&mut m, "a.0", Value::from("first"));
        assert_eq!(Value::Object(m), json!({"a": ["first", {"x": 5}]}));
    }

    #[test]
    fn remove_keeps_sibling_order() {
        let mut m = map(json!({"a": 1, "b": 2, "c": 3}));
        assert!(remove(&mut m, "b"));
        assert!(!remove(&mut m, "b"));
        let keys: Vec<&str> = m.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn remove_nested_and_array_element() {
        let mut m = map(json!({"a": {"b": {"c": 1, "d": 2}}, "l": [1, 2, 3]}));
        assert!(remove(&mut m, "a.b.c"));
        assert!(remove(&mut m, "l.0"));
        assert!(!remove(&mut m, "l.9"));
        assert!(!remove(&mut m, "missing.deep"));
        assert_eq!(Value::Object(m), json!({"a": {"b": {"d": 2}}, "l": [2, 3]}));
    }
}
