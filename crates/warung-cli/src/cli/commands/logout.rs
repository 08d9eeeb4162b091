//! `warung logout` - clears the persisted session from the command line.

use anyhow::Result;
use warung_core::auth;
use warung_core::prefs::PrefStore;

pub fn run() -> Result<()> {
    let store = PrefStore::open_default();
    auth::evaluate_logout(&store)?;
    println!("Sesi dihapus.");
    Ok(())
}
