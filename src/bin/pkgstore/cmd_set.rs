use anyhow::Result;

use super::cli::Location;
use super::util::{open_store, parse_value_arg, save};

pub fn exec(loc: Location, key: String, value: String) -> Result<()> {
    let mut store = open_store(loc)?;
    let v = parse_value_arg(&value);
    println!("OK set '{}' = {}", key, v);
    store.set(&key, v);
    save(&store)
}
