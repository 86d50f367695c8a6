//! mapping/union — duplicate-suppressing append.

use crate::value::Value;

/// Treats `current` and `incoming` as ordered sets and returns their union:
/// - absent / Undefined => []
/// - array => its elements
/// - anything else (Null included) => [value]
///
/// Duplicates (deep equality) are dropped, first occurrence wins. Values are
/// not hashable (floats), so this is a linear scan per element.
pub(crate) fn union_values(current: Option<&Value>, incoming: Value) -> Vec<Value> {
    let mut all: Vec<Value> = match current {
        None | Some(Value::Undefined) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(other) => vec![other.clone()],
    };
    match incoming {
        Value::Undefined => {}
        Value::Array(items) => all.extend(items),
        other => all.push(other),
    }

    let mut out: Vec<Value> = Vec::with_capacity(all.len());
    for v in all {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}
