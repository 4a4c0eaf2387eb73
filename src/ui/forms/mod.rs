//! Form builder rendering
//!
//! - `field_renderer`: one field card and its inputs
//! - `draw_field_list`: the stack of cards, scrolled to `first_visible`

mod field_renderer;

use crate::app::App;
use crate::state::{card_height, EditTarget, MIN_PARTIAL_CARD};
use field_renderer::{draw_field_card, CardFocus};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Draw the field cards from `first_visible` down until the area is full
pub fn draw_field_list(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    if state.store.is_empty() {
        let hint = Paragraph::new("\n  No fields yet. Press Ctrl+A to add one.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, area);
        return;
    }

    let fields = state.store.fields();
    let lifted = state.store.lifted();
    let mut y = area.y;
    for (index, field) in fields.iter().enumerate().skip(state.first_visible) {
        let remaining = area.bottom().saturating_sub(y);
        if remaining < MIN_PARTIAL_CARD {
            break;
        }
        let card = Rect {
            y,
            height: card_height(field).min(remaining),
            ..area
        };
        let focus = card_focus(index, state.selected, state.target, lifted);
        draw_field_card(frame, card, field, index, focus);
        y += card.height;
    }
}

fn card_focus(
    index: usize,
    selected: usize,
    target: EditTarget,
    lifted: Option<usize>,
) -> CardFocus {
    if lifted == Some(index) {
        CardFocus::Lifted
    } else if index == selected {
        CardFocus::Editing(target)
    } else {
        CardFocus::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_focus_prefers_lifted() {
        assert_eq!(
            card_focus(1, 1, EditTarget::Label, Some(1)),
            CardFocus::Lifted
        );
    }

    #[test]
    fn test_card_focus_selected() {
        assert_eq!(
            card_focus(0, 0, EditTarget::Placeholder, None),
            CardFocus::Editing(EditTarget::Placeholder)
        );
    }

    #[test]
    fn test_card_focus_other() {
        assert_eq!(card_focus(2, 0, EditTarget::Label, Some(1)), CardFocus::None);
    }
}
