// tictactty: tic-tac-toe with a move-history navigator

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tictactty::config::Config;
use tictactty::logging::init_logging;
use tictactty::snapshot::History;
use tictactty::ui::terminal::{install_panic_hook, restore_terminal, setup_terminal};
use tictactty::ui::App;

fn main() -> Result<()> {
    let config = Config::parse();

    if let Some(path) = init_logging(&config)? {
        eprintln!("Logging to {}", path.display());
    }
    info!(mouse = !config.no_mouse, "Starting tictactty");

    install_panic_hook();
    let mut terminal = setup_terminal(!config.no_mouse)?;

    let mut app = App::new(History::new());
    let res = app.run(&mut terminal);

    restore_terminal();

    info!(
        moves = app.history.len() - 1,
        winner = ?app.history.winner(),
        "Exiting tictactty"
    );

    res.context("running the UI")
}
