use anyhow::Result;

use super::cli::Location;
use super::util::open_store;

pub fn exec(loc: Location, key: String, json: bool) -> Result<()> {
    let store = open_store(loc)?;
    match store.get(&key) {
        Some(v) if json => println!("{}", serde_json::to_string_pretty(v)?),
        Some(v) => match v.as_str() {
            Some(s) => println!("{}", s),
            None => println!("{}", v),
        },
        None => println!("NOT FOUND '{}'", key),
    }
    Ok(())
}
