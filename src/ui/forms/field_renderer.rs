//! Field card rendering

use crate::state::{EditTarget, Field, FieldType, INPUT_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// How a card is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFocus {
    None,
    /// Selected, with the input receiving keystrokes
    Editing(EditTarget),
    /// Being dragged
    Lifted,
}

/// Draw one field card: label input, then placeholder or options
pub fn draw_field_card(
    frame: &mut Frame,
    area: Rect,
    field: &Field,
    index: usize,
    focus: CardFocus,
) {
    let border_style = match focus {
        CardFocus::Lifted => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CardFocus::Editing(_) => Style::default().fg(Color::Cyan),
        CardFocus::None => Style::default().fg(Color::DarkGray),
    };
    let target = match focus {
        CardFocus::Editing(target) => Some(target),
        _ => None,
    };

    let block = Block::default()
        .title(format!(" {}. {} ", index + 1, field.field_type().label()))
        .title(
            Line::from(" ^D Delete ")
                .right_aligned()
                .style(Style::default().fg(Color::Red)),
        )
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_area = Rect {
        height: INPUT_HEIGHT.min(inner.height),
        ..inner
    };
    draw_input(
        frame,
        label_area,
        "Question",
        field.label(),
        target == Some(EditTarget::Label),
    );

    let body = Rect {
        y: inner.y + label_area.height,
        height: inner.height.saturating_sub(label_area.height),
        ..inner
    };
    if body.height == 0 {
        return;
    }

    match field.field_type() {
        FieldType::Text => draw_input(
            frame,
            body,
            "Placeholder",
            field.placeholder().unwrap_or_default(),
            target == Some(EditTarget::Placeholder),
        ),
        FieldType::Radio | FieldType::Checkbox => draw_options(frame, body, field, target),
    }
}

/// One row per option, then the "+ Add Option" row
fn draw_options(frame: &mut Frame, area: Rect, field: &Field, target: Option<EditTarget>) {
    let marker = field.field_type().option_marker();
    let mut lines: Vec<Line> = field
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let is_active = target == Some(EditTarget::Option(i));
            let style = if is_active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            let mut spans = vec![
                Span::styled(format!(" {marker} "), Style::default().fg(Color::DarkGray)),
                Span::styled(option.as_str(), style),
            ];
            if is_active {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        })
        .collect();
    lines.push(Line::from(Span::styled(
        " + Add Option (^O)",
        Style::default().fg(Color::Blue),
    )));
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw a bordered single-line input
pub fn draw_input(frame: &mut Frame, area: Rect, title: &str, value: &str, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}
