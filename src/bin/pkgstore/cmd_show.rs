use anyhow::Result;

use super::cli::Location;
use super::util::open_store;

pub fn exec(loc: Location) -> Result<()> {
    let store = open_store(loc)?;
    print!("{}", store.to_json_string()?);
    Ok(())
}
