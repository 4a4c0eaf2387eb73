//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render a generic button with border
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, is_selected: bool) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue)
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a button labelled with its shortcut key
pub fn render_key_button(frame: &mut Frame, area: Rect, key: &str, label: &str) {
    let content = format!("{key} {label}");
    render_button(frame, area, &content, false);
}

/// Width a button needs for `content`, borders and padding included
pub fn button_width(content: &str) -> u16 {
    content.chars().count() as u16 + 4
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_button_width() {
        assert_eq!(button_width("+ Add Field"), 15);
    }

    #[test]
    fn test_render_button_draws_content() {
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|frame| render_button(frame, frame.area(), "+ Add Field", true))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let row: String = (0..20u16).map(|x| buffer[(x, 1u16)].symbol()).collect();
        assert!(row.contains("+ Add Field"));
    }
}
