//! `warung prefs` - inspect and reset the preference file.

use anyhow::Result;
use warung_core::prefs::PrefStore;

use super::super::PrefsCommands;

pub fn run(command: PrefsCommands) -> Result<()> {
    let store = PrefStore::open_default();

    match command {
        PrefsCommands::Path => {
            println!("{}", store.path().display());
            Ok(())
        }
        PrefsCommands::Show => {
            let prefs = store.snapshot()?;
            println!("remember_me:  {}", prefs.remember_me);
            println!("email:        {}", prefs.email.as_deref().unwrap_or("-"));
            // The password itself never goes to stdout.
            println!(
                "password:     {}",
                if prefs.password.is_some() { "(tersimpan)" } else { "-" }
            );
            println!("is_logged_in: {}", prefs.is_logged_in);
            println!("user_role:    {}", prefs.user_role.as_deref().unwrap_or("-"));
            Ok(())
        }
        PrefsCommands::Clear => {
            store.clear_all()?;
            println!("Preferensi dihapus.");
            Ok(())
        }
    }
}
