// petshelf: terminal UI for browsing and managing pet adoption records.
// Wires up logging, the API client, and the terminal, then runs the app.

mod api;
mod app;
mod cache;
mod error;
mod state;
mod ui;

use std::fs::{self, File};
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Mutex;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use crate::api::PetApiClient;
use crate::app::App;
use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cache_root = cache::paths::cache_dir();
    init_tracing(cache_root.as_deref());

    let client = PetApiClient::from_env()?;
    tracing::info!(base_url = client.base_url(), "starting petshelf");

    let mut terminal = setup_terminal()?;
    let mut app = App::new(client, cache_root);
    let result = app.run(&mut terminal).await;
    restore_terminal(&mut terminal)?;

    result
}

/// Set up file-based logging under the cache directory so log output
/// never corrupts the TUI. Filtered by RUST_LOG.
fn init_tracing(cache_root: Option<&Path>) {
    let Some(root) = cache_root else {
        return;
    };
    if fs::create_dir_all(root).is_err() {
        return;
    }
    let Ok(file) = File::create(cache::paths::log_path(root)) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("petshelf=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
