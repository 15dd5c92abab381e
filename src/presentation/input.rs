use crate::application::{App, AppMode};
use crate::domain::{Fetch, Store};
use crate::infrastructure::copy_text;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub async fn handle_key_event<F, S>(app: &mut App<F, S>, key: KeyCode, modifiers: KeyModifiers)
    where
        F: Fetch,
        S: Store,
    {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers).await,
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    async fn handle_normal_mode<F, S>(app: &mut App<F, S>, key: KeyCode, modifiers: KeyModifiers)
    where
        F: Fetch,
        S: Store,
    {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        app.status_message = None;

        match key {
            KeyCode::Char('a') | KeyCode::Enter => app.draw_card().await,
            KeyCode::Char('c') => app.clear_table(),
            KeyCode::Char(' ') | KeyCode::Char('f') => app.flip_selected(),
            KeyCode::Char('y') => {
                if let Some(card) = app.selected_card() {
                    let image = card.image.clone();
                    let result = copy_text(&image).map(|_| image);
                    app.set_yank_result(result);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => app.select_previous(),
            KeyCode::Right | KeyCode::Char('l') => app.select_next(),
            KeyCode::Up | KeyCode::Char('k') => app.select_up(),
            KeyCode::Down | KeyCode::Char('j') => app.select_down(),
            KeyCode::Home => app.select_first(),
            KeyCode::End => app.select_last(),
            KeyCode::F(1) | KeyCode::Char('?') => app.open_help(),
            _ => {}
        }
    }

    fn handle_help_mode<F, S>(app: &mut App<F, S>, key: KeyCode)
    where
        F: Fetch,
        S: Store,
    {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => app.close_help(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_help(-1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_help(1),
            KeyCode::PageUp => app.scroll_help(-5),
            KeyCode::PageDown => app.scroll_help(5),
            KeyCode::Home => app.help_scroll = 0,
            _ => {}
        }
    }
}
