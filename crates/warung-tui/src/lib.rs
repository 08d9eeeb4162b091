//! Full-screen TUI for the Warung storefront prototype.
//!
//! Screens: splash, login, register, home (catalog browsing), and product
//! detail. State lives in `state::AppState`, all mutations go through the
//! reducer in `update`, and side effects are executed by `runtime`.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use features::{auth, detail, home, splash};
pub use runtime::TuiRuntime;
use warung_core::prefs::PrefStore;

/// Runs the storefront TUI against the given preference store.
pub async fn run(store: PrefStore) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!("The storefront UI requires a terminal.");
    }

    let mut runtime = TuiRuntime::new(store)?;
    runtime.run()?;

    // Terminal is restored by the time the runtime returns.
    writeln!(stderr(), "Sampai jumpa!")?;

    Ok(())
}
