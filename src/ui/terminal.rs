//! Terminal setup and teardown around the UI

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};

/// Restore the terminal to normal state.
///
/// Best effort: every step runs even if an earlier one fails, and errors are
/// ignored since this also runs from the panic hook. Safe to call more than once.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = io::stdout().flush();
}

/// Restore the terminal before the default hook prints the panic message
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));
}

/// Enter raw mode and the alternate screen, optionally capturing the mouse.
///
/// On failure the terminal is restored before the error is returned.
pub fn setup_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let result = (|| -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("enabling raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
        if mouse {
            execute!(stdout, EnableMouseCapture).context("enabling mouse capture")?;
        }
        Terminal::new(CrosstermBackend::new(stdout)).context("creating terminal")
    })();

    if result.is_err() {
        restore_terminal();
    }
    result
}
