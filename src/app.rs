//! Application state and input handling

use crate::config::BuilderConfig;
use crate::platform::{COMMAND_MODIFIER, MOVE_MODIFIER};
use crate::state::{
    add_bar_contains, card_at_row, list_viewport_height, AppState, CardRegion, EditTarget,
    FieldType,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};

/// Second Ctrl+C within this window quits
const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(800);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Show key hints in the status bar
    pub show_help: bool,
    /// Terminal size for scrolling calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    pub fn new(config: &BuilderConfig) -> Self {
        Self {
            state: AppState::default(),
            quit: false,
            show_help: config.show_help(),
            terminal_size: None,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.state.status_message = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let now = Instant::now();
            if self
                .last_ctrl_c
                .is_some_and(|t| now.duration_since(t) < DOUBLE_TAP_WINDOW)
            {
                self.quit = true;
            } else {
                self.last_ctrl_c = Some(now);
                self.state.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
            return Ok(());
        }

        if self.state.add_menu_open {
            self.handle_add_menu_key(key);
        } else {
            self.handle_builder_key(key);
        }

        self.keep_selection_visible();
        Ok(())
    }

    /// Keys while the field type menu is open
    fn handle_add_menu_key(&mut self, key: KeyEvent) {
        let field_type = match key.code {
            KeyCode::Char('t') | KeyCode::Char('1') => FieldType::Text,
            KeyCode::Char('r') | KeyCode::Char('2') => FieldType::Radio,
            KeyCode::Char('c') | KeyCode::Char('3') => FieldType::Checkbox,
            KeyCode::Char('a') if key.modifiers.contains(COMMAND_MODIFIER) => {
                self.state.toggle_add_menu();
                return;
            }
            KeyCode::Esc => {
                self.state.add_menu_open = false;
                return;
            }
            _ => return,
        };
        self.state.add_field(field_type);
        tracing::info!(
            field_type = field_type.name(),
            count = self.state.store.len(),
            "field added"
        );
    }

    /// Keys while editing the field list
    fn handle_builder_key(&mut self, key: KeyEvent) {
        let command = key.modifiers.contains(COMMAND_MODIFIER);
        let moving = key.modifiers.contains(MOVE_MODIFIER);

        match key.code {
            KeyCode::Char('a') if command => self.state.toggle_add_menu(),
            KeyCode::Char('d') if command => self.state.delete_selected(),
            KeyCode::Char('o') if command => self.state.add_option(),
            KeyCode::Up if moving => self.state.move_selected(false),
            KeyCode::Down if moving => self.state.move_selected(true),
            KeyCode::Up => self.state.select_prev(),
            KeyCode::Down => self.state.select_next(),
            KeyCode::Tab => self.state.next_target(),
            KeyCode::BackTab => self.state.prev_target(),
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Esc => self.quit = true,
            // Alt chords are shortcuts, never text
            KeyCode::Char(c) if !command && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.state.input_char(c)
            }
            _ => {}
        }
    }

    /// Handle mouse events: press lifts a card, drag reorders live, release drops
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let first_visible = self.state.first_visible;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.state.status_message = None;
                if self.add_bar_hit(mouse.row) {
                    self.state.toggle_add_menu();
                } else if let Some((index, region)) = self.card_hit(mouse.row) {
                    self.state.begin_drag(index);
                    match region {
                        CardRegion::Border | CardRegion::Label => {
                            self.state.target = EditTarget::Label
                        }
                        CardRegion::Placeholder => self.state.target = EditTarget::Placeholder,
                        CardRegion::Option(i) => self.state.target = EditTarget::Option(i),
                        CardRegion::AddOption => self.state.add_option_at(index),
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                // Only meaningful while a card is lifted
                if self.state.store.lifted().is_some() {
                    if let Some((index, _)) = self.card_hit(mouse.row) {
                        self.state.drag_to(index);
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.state.end_drag(),
            MouseEventKind::ScrollUp => {
                self.state.first_visible = first_visible.saturating_sub(1);
            }
            MouseEventKind::ScrollDown => {
                let last = self.state.store.len().saturating_sub(1);
                self.state.first_visible = (first_visible + 1).min(last);
            }
            _ => {}
        }
        Ok(())
    }

    /// Card under a mouse row, limited to the cards actually drawn
    fn card_hit(&self, row: u16) -> Option<(usize, CardRegion)> {
        let (height, _) = self.terminal_size?;
        let viewport = list_viewport_height(height, self.state.add_menu_open);
        card_at_row(
            self.state.store.fields(),
            self.state.first_visible,
            viewport,
            row,
        )
    }

    fn add_bar_hit(&self, row: u16) -> bool {
        self.terminal_size
            .is_some_and(|(height, _)| add_bar_contains(height, self.state.add_menu_open, row))
    }

    fn keep_selection_visible(&mut self) {
        if let Some((height, _)) = self.terminal_size {
            self.state.scroll_into_view(height);
        }
    }
}
