//! Terminal lifecycle management.
//!
//! Terminal state is guaranteed to be restored on:
//! - Normal exit (via Drop on the runtime)
//! - Panic (via the installed hook)

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Sets up the terminal for the TUI: raw mode plus alternate screen.
///
/// Call `install_panic_hook()` before this to ensure restore on panic.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Enables bracketed paste for the event loop.
///
/// Enabled separately from `setup_terminal()` so normal exit paths can
/// disable it before `restore_terminal()`; the restore also disables it to
/// cover the panic path.
pub fn enable_input_features() -> Result<()> {
    execute!(io::stdout(), EnableBracketedPaste).context("Failed to enable bracketed paste")?;
    Ok(())
}

/// Disables bracketed paste; call before `restore_terminal()` on normal exit.
pub fn disable_input_features() -> Result<()> {
    execute!(io::stdout(), DisableBracketedPaste).context("Failed to disable bracketed paste")?;
    Ok(())
}

/// Restores terminal state. Idempotent and safe to call multiple times.
pub fn restore_terminal() -> Result<()> {
    let _ = execute!(io::stdout(), DisableBracketedPaste);
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the
/// panic. Call BEFORE `setup_terminal()`.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
