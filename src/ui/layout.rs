//! Layout components (header, add bar, status bar)

use super::components::{button_width, render_button, render_key_button};
use crate::app::App;
use crate::platform::MOVE_SHORTCUT;
use crate::state::{FieldType, ADD_BAR_HEIGHT, ADD_MENU_HEIGHT, HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label of the button that opens the field type menu
const ADD_FIELD_LABEL: &str = "+ Add Field";

/// Screen regions of the builder
pub struct BuilderLayout {
    pub header: Rect,
    pub fields: Rect,
    pub add_bar: Rect,
    pub add_menu: Option<Rect>,
    pub status: Rect,
}

/// Split the screen; the menu row exists only while the menu is open
pub fn create_layout(area: Rect, menu_open: bool) -> BuilderLayout {
    let menu_height = if menu_open { ADD_MENU_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),     // Header
            Constraint::Min(0),                    // Field cards
            Constraint::Length(ADD_BAR_HEIGHT),    // Add button
            Constraint::Length(menu_height),       // Field type menu
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);

    BuilderLayout {
        header: chunks[0],
        fields: chunks[1],
        add_bar: chunks[2],
        add_menu: menu_open.then_some(chunks[3]),
        status: chunks[4],
    }
}

/// Draw the title header with the field count
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let count = app.state.store.len();
    let noun = if count == 1 { "field" } else { "fields" };
    let title = Line::from(vec![
        Span::styled(
            "Form Builder",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {count} {noun}"),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(title).block(block), area);
}

/// Draw the "+ Add Field" button and, when open, the field type menu
pub fn draw_add_bar(frame: &mut Frame, add_bar: Rect, add_menu: Option<Rect>, app: &App) {
    let button_area = Rect {
        width: button_width(ADD_FIELD_LABEL).min(add_bar.width),
        ..add_bar
    };
    render_button(frame, button_area, ADD_FIELD_LABEL, app.state.add_menu_open);

    let Some(menu) = add_menu else {
        return;
    };
    let entries: Vec<(String, &str)> = FieldType::ALL
        .iter()
        .map(|ty| (menu_key(*ty).to_string(), ty.label()))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            entries
                .iter()
                .map(|(key, label)| Constraint::Length(button_width(&format!("{key} {label}")) + 1)),
        )
        .split(menu);
    for ((key, label), area) in entries.iter().zip(chunks.iter()) {
        let area = Rect {
            width: area.width.saturating_sub(1),
            ..*area
        };
        render_key_button(frame, area, key, label);
    }
}

/// Key that adds a field of this type from the open menu
fn menu_key(field_type: FieldType) -> char {
    match field_type {
        FieldType::Text => 't',
        FieldType::Radio => 'r',
        FieldType::Checkbox => 'c',
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    if app.state.store.lifted().is_some() {
        spans.push(Span::styled(
            " ● moving ",
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::styled(
            format!(" {msg} "),
            Style::default().fg(Color::Red),
        ));
    } else if app.show_help {
        spans.push(Span::styled(
            get_hints(app.state.add_menu_open),
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current mode
fn get_hints(menu_open: bool) -> String {
    if menu_open {
        " t/r/c:add field  Esc:close".to_string()
    } else {
        format!(
            " ↑↓:select  Tab:next input  {MOVE_SHORTCUT}:move  ^A:add  ^O:option  ^D:delete  Esc:quit"
        )
    }
}
