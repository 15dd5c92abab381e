use crate::application::{App, AppMode};
use crate::domain::{Fetch, Store};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Tile size of one card, borders included.
pub const CARD_WIDTH: u16 = 9;
pub const CARD_HEIGHT: u16 = 5;
const CARD_GAP: u16 = 1;

/// Cards that fit side by side in `width` columns.
pub fn grid_columns_for(width: u16) -> usize {
    (width.saturating_add(CARD_GAP) / (CARD_WIDTH + CARD_GAP)).max(1) as usize
}

pub fn render_ui<F: Fetch, S: Store>(f: &mut Frame, app: &App<F, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_table(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);

    if app.mode == AppMode::Help {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header<F: Fetch, S: Store>(f: &mut Frame, app: &App<F, S>, area: Rect) {
    let header = Paragraph::new(format!(
        "cardtable - Pick a card, any card! | Cards: {} | Table: {}",
        app.cards().len(),
        app.table.list().key()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_table<F: Fetch, S: Store>(f: &mut Frame, app: &App<F, S>, area: Rect) {
    let cards = app.cards();
    if cards.is_empty() {
        let empty = Paragraph::new("The table is empty. Press 'a' to add a playing card!")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
        return;
    }

    let columns = grid_columns_for(area.width);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = app.selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let first = first_row * columns;
    let last = ((first_row + visible_rows) * columns).min(cards.len());

    for index in first..last {
        let row = (index / columns - first_row) as u16;
        let col = (index % columns) as u16;
        let tile = Rect {
            x: area.x + col * (CARD_WIDTH + CARD_GAP),
            y: area.y + row * CARD_HEIGHT,
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
        };
        if tile.right() > area.right() || tile.bottom() > area.bottom() {
            continue;
        }

        let card = &cards[index];
        let border_style = if index == app.selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let block = Block::default().borders(Borders::ALL).border_style(border_style);

        let face = if app.is_flipped(index) {
            Paragraph::new("░░░░░░░\n░░░░░░░\n░░░░░░░").style(Style::default().fg(Color::Blue))
        } else {
            let color = if card.is_red() { Color::Red } else { Color::White };
            Paragraph::new(format!("\n{}", card.face()))
                .alignment(Alignment::Center)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        };
        f.render_widget(face.block(block), tile);
    }
}

fn render_status_bar<F: Fetch, S: Store>(f: &mut Frame, app: &App<F, S>, area: Rect) {
    let text = match app.mode {
        AppMode::Normal => match &app.status_message {
            Some(status) => status.clone(),
            None => "a: add a playing card | c: clear the table | space: flip | y: copy image URL | ?: help | q: quit"
                .to_string(),
        },
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let help_widget = Paragraph::new(help_lines[start_line..end_line].join("\n"))
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("cardtable Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

const HELP_TEXT: &str = r#"CARDTABLE

Every draw fetches one card from the Deck of Cards API and lays it
on the table. The table is saved after every change and restored
the next time you start cardtable with the same --key.

=== TABLE ===
a / Enter       Add a playing card
c               Clear the table
Space / f       Flip the selected card face down / face up
y               Copy the selected card's image URL

=== NAVIGATION ===
←→ or h/l       Previous / next card
↑↓ or k/j       Card above / below
Home / End      First / last card
F1 or ?         Show this help
q               Quit

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window

=== OPTIONS ===
--key NAME          Storage key for the table (default "cards")
--base-url URL      Draw endpoint
--path-suffix TEXT  Appended to the endpoint on every draw
--store-dir DIR     Where tables are saved
--log-file PATH     Where logs are written (RUST_LOG sets the level)"#;
