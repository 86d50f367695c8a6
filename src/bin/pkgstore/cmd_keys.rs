use anyhow::Result;

use super::cli::Location;
use super::util::open_store;

pub fn exec(loc: Location) -> Result<()> {
    let store = open_store(loc)?;
    for k in store.data().keys() {
        println!("{}", k);
    }
    Ok(())
}
