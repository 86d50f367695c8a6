use anyhow::Result;

use PkgStore::Value;

use super::cli::Location;
use super::util::{open_store, parse_value_arg, save};

pub fn exec(loc: Location, key: String, values: Vec<String>) -> Result<()> {
    let mut store = open_store(loc)?;
    let items: Vec<Value> = values.iter().map(|s| parse_value_arg(s)).collect();
    store.union(&key, Value::Array(items));
    if let Some(v) = store.get(&key) {
        println!("OK union '{}' -> {}", key, v);
    }
    save(&store)
}
