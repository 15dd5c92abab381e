//! cardtable - Pick a card, any card!
//!
//! A terminal card table. Each draw fetches a card from the Deck of Cards
//! API; the table is saved after every change and restored on start.

use std::io;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{error, info};

use cardtable::application::{App, AppMode, RemoteAppender};
use cardtable::domain::{Fetch, PersistentList, Store};
use cardtable::infrastructure::{init_logging, Config, FileStore, HttpFetcher};
use cardtable::presentation::{grid_columns_for, render_ui, InputHandler};

/// Entry point for the cardtable terminal application.
///
/// Parses configuration, starts file logging, restores the saved table and
/// runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if configuration, the store, the HTTP client or the
/// terminal cannot be set up.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    init_logging(&config.log_file()?)?;

    let store_dir = config.store_dir()?;
    info!(
        key = %config.key,
        base_url = %config.base_url,
        store_dir = %store_dir.display(),
        "cardtable starting"
    );

    let list = PersistentList::init(config.key.clone(), FileStore::new(store_dir))?;
    let table = RemoteAppender::new(config.base_url.clone(), HttpFetcher::new()?, list);
    let mut app = App::new(table, config.path_suffix.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "event loop failed");
        println!("{err:?}");
    }

    info!("cardtable exiting");
    Ok(())
}

/// Main application event loop.
///
/// Redraws, waits for a key and dispatches it. A draw suspends the loop
/// until the request completes. Continues until the user presses 'q' in
/// normal mode.
async fn run_app<B, F, S>(terminal: &mut Terminal<B>, app: &mut App<F, S>) -> io::Result<()>
where
    B: Backend,
    F: Fetch,
    S: Store,
{
    loop {
        let size = terminal.size()?;
        app.update_grid_columns(grid_columns_for(size.width));
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if app.mode == AppMode::Normal => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers).await,
                }
            }
        }
    }
}
