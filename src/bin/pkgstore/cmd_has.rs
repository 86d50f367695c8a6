use anyhow::Result;

use super::cli::Location;
use super::util::open_store;

pub fn exec(loc: Location, key: String, own: bool) -> Result<()> {
    let store = open_store(loc)?;
    let present = if own { store.has_own(&key) } else { store.has(&key) };
    if present {
        println!("FOUND '{}'", key);
    } else {
        println!("NOT FOUND '{}'", key);
    }
    Ok(())
}
