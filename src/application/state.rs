//! Application state for the terminal card table.
//!
//! Holds the persisted cards, per-card flip state, the selection and the
//! current UI mode.

use super::appender::RemoteAppender;
use crate::domain::{CardFormatter, Fetch, FlipState, PlayingCard, Store, TableResult};
use tracing::warn;

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Card table is shown; draw, clear, flip and navigation keys are live
    Normal,
    /// Help screen is displayed
    Help,
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use cardtable::application::{App, AppMode, RemoteAppender};
/// use cardtable::domain::PersistentList;
/// use cardtable::infrastructure::{HttpFetcher, MemoryStore, DEFAULT_BASE_URL};
///
/// let list = PersistentList::init("cards", MemoryStore::default()).unwrap();
/// let table = RemoteAppender::new(DEFAULT_BASE_URL, HttpFetcher::new().unwrap(), list);
/// let app = App::new(table, "");
/// assert!(app.cards().is_empty());
/// assert_eq!(app.mode, AppMode::Normal);
/// ```
#[derive(Debug)]
pub struct App<F, S> {
    /// Cards on the table, mirrored to the store
    pub table: RemoteAppender<PlayingCard, F, S>,
    /// Flip state per card, same length as the card list; not persisted
    pub flips: Vec<FlipState>,
    /// Index of the selected card
    pub selected: usize,
    /// Current application mode
    pub mode: AppMode,
    /// Suffix appended to the base URL on every draw
    pub path_suffix: String,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Cards per grid row, as last laid out by the UI
    pub grid_columns: usize,
}

impl<F, S> App<F, S>
where
    F: Fetch,
    S: Store,
{
    pub fn new(table: RemoteAppender<PlayingCard, F, S>, path_suffix: impl Into<String>) -> Self {
        let flips = vec![FlipState::default(); table.items().len()];
        Self {
            table,
            flips,
            selected: 0,
            mode: AppMode::Normal,
            path_suffix: path_suffix.into(),
            help_scroll: 0,
            status_message: None,
            grid_columns: 1,
        }
    }

    pub fn cards(&self) -> &[PlayingCard] {
        self.table.items()
    }

    pub fn selected_card(&self) -> Option<&PlayingCard> {
        self.cards().get(self.selected)
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.flips.get(index).is_some_and(FlipState::is_flipped)
    }

    /// Draws one card and selects it.
    ///
    /// Failures leave the table as it was and are reported in the status
    /// line.
    pub async fn draw_card(&mut self) {
        let result = self
            .table
            .fetch_and_append(&CardFormatter, &self.path_suffix)
            .await
            .map(|card| card.face());

        match result {
            Ok(face) => {
                self.flips.push(FlipState::default());
                self.selected = self.cards().len() - 1;
                self.status_message = Some(format!("Drew {}", face));
            }
            Err(error) => {
                warn!(error = %error, "draw failed");
                self.status_message = Some(format!("Draw failed: {}", error));
            }
        }
    }

    pub fn clear_table(&mut self) {
        match self.table.clear() {
            Ok(()) => {
                self.flips.clear();
                self.selected = 0;
                self.status_message = Some("Cleared the table".to_string());
            }
            Err(error) => {
                self.status_message = Some(format!("Clear failed: {}", error));
            }
        }
    }

    pub fn flip_selected(&mut self) {
        if let Some(state) = self.flips.get_mut(self.selected) {
            state.flip();
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.cards().len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        let target = self.selected + self.grid_columns.max(1);
        if target < self.cards().len() {
            self.selected = target;
        }
    }

    pub fn select_up(&mut self) {
        if let Some(target) = self.selected.checked_sub(self.grid_columns.max(1)) {
            self.selected = target;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.cards().len().saturating_sub(1);
    }

    pub fn update_grid_columns(&mut self, columns: usize) {
        self.grid_columns = columns.max(1);
    }

    /// Processes the result of copying the selected card's image URL.
    pub fn set_yank_result(&mut self, result: TableResult<String>) {
        self.status_message = Some(match result {
            Ok(url) => format!("Copied {}", url),
            Err(error) => format!("Copy failed: {}", error),
        });
    }

    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn scroll_help(&mut self, delta: isize) {
        self.help_scroll = self.help_scroll.saturating_add_signed(delta);
    }
}
