//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = layout::create_layout(frame.area(), app.state.add_menu_open);

    layout::draw_header(frame, layout.header, app);
    forms::draw_field_list(frame, layout.fields, app);
    layout::draw_add_bar(frame, layout.add_bar, layout.add_menu, app);
    layout::draw_status_bar(frame, layout.status, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuilderConfig;
    use crate::state::FieldType;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..24u16)
            .map(|y| (0..80u16).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_builder() {
        let app = App::new(&BuilderConfig::default());
        let out = screen(&app);
        assert!(out.contains("Form Builder"));
        assert!(out.contains("0 fields"));
        assert!(out.contains("No fields yet"));
        assert!(out.contains("+ Add Field"));
    }

    #[test]
    fn test_open_menu_lists_field_types() {
        let mut app = App::new(&BuilderConfig::default());
        app.state.toggle_add_menu();
        let out = screen(&app);
        assert!(out.contains("t Text Field"));
        assert!(out.contains("r Radio Button"));
        assert!(out.contains("c Checkbox"));
    }

    #[test]
    fn test_cards_and_status_message() {
        let mut app = App::new(&BuilderConfig::default());
        app.state.add_field(FieldType::Text);
        app.state.add_field(FieldType::Radio);
        app.state.status_message = Some("field index 9 out of range (len 2)".to_string());
        let out = screen(&app);
        assert!(out.contains("2 fields"));
        assert!(out.contains("1. Text Field"));
        assert!(out.contains("2. Radio Button"));
        assert!(out.contains("out of range"));
    }

    #[test]
    fn test_drag_indicator() {
        let mut app = App::new(&BuilderConfig::default());
        app.state.add_field(FieldType::Text);
        app.state.begin_drag(0);
        assert!(screen(&app).contains("moving"));
    }
}
