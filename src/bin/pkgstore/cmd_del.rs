use anyhow::Result;

use PkgStore::DelOptions;

use super::cli::Location;
use super::util::{open_store, save};

pub fn exec(loc: Location, keys: Vec<String>, force: bool) -> Result<()> {
    let mut store = open_store(loc)?;
    if keys.is_empty() {
        // Без ключей — только полная очистка, и только с --force
        let removed = store.clear(DelOptions { force })?;
        println!("CLEARED {} key(s): {}", removed.len(), removed.join(", "));
    } else {
        let n = store.del_many(&keys);
        println!("DELETED {} of {} path(s)", n, keys.len());
    }
    save(&store)
}
