//! Application state definitions

use super::forms::{Field, FieldError, FieldListStore, FieldType};
use super::ui_area;

/// Which input of the selected field receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditTarget {
    #[default]
    Label,
    Placeholder,
    Option(usize),
}

impl EditTarget {
    /// Targets a field exposes, in Tab order
    pub fn all_for(field: &Field) -> Vec<EditTarget> {
        let mut targets = vec![EditTarget::Label];
        match field.field_type() {
            FieldType::Text => targets.push(EditTarget::Placeholder),
            FieldType::Radio | FieldType::Checkbox => {
                targets.extend((0..field.options().len()).map(EditTarget::Option));
            }
        }
        targets
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub store: FieldListStore,
    /// Index of the highlighted field card
    pub selected: usize,
    pub target: EditTarget,
    pub add_menu_open: bool,
    /// Index of the topmost drawn card
    pub first_visible: usize,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn selected_field(&self) -> Option<&Field> {
        self.store.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.select(self.selected + 1);
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.select(self.selected - 1);
        }
    }

    /// Highlight a field and start editing its label
    pub fn select(&mut self, index: usize) {
        if index < self.store.len() {
            self.selected = index;
            self.target = EditTarget::Label;
        }
    }

    pub fn next_target(&mut self) {
        self.cycle_target(1);
    }

    pub fn prev_target(&mut self) {
        self.cycle_target(-1);
    }

    fn cycle_target(&mut self, step: isize) {
        let Some(field) = self.selected_field() else {
            return;
        };
        let targets = EditTarget::all_for(field);
        let len = targets.len() as isize;
        let current = targets.iter().position(|t| *t == self.target).unwrap_or(0) as isize;
        self.target = targets[(current + step).rem_euclid(len) as usize];
    }

    pub fn toggle_add_menu(&mut self) {
        self.add_menu_open = !self.add_menu_open;
    }

    /// Append a field, select it and close the menu
    pub fn add_field(&mut self, field_type: FieldType) {
        let len = self.store.add_field(field_type).len();
        self.select(len - 1);
        self.add_menu_open = false;
    }

    pub fn delete_selected(&mut self) {
        match self.store.delete_field(self.selected) {
            Ok(fields) => {
                let len = fields.len();
                self.selected = self.selected.min(len.saturating_sub(1));
                self.target = EditTarget::Label;
                self.first_visible = self.first_visible.min(self.selected);
            }
            Err(e) => self.report(e),
        }
    }

    /// Append an option to the selected field and move editing to it
    pub fn add_option(&mut self) {
        self.add_option_at(self.selected);
    }

    pub fn add_option_at(&mut self, index: usize) {
        match self.store.add_option(index) {
            Ok(fields) => {
                let count = fields[index].options().len();
                self.selected = index;
                self.target = EditTarget::Option(count - 1);
            }
            Err(e) => self.report(e),
        }
    }

    /// Text of the current edit target
    pub fn target_text(&self) -> Option<&str> {
        let field = self.selected_field()?;
        match self.target {
            EditTarget::Label => Some(field.label()),
            EditTarget::Placeholder => Some(field.placeholder().unwrap_or_default()),
            EditTarget::Option(i) => field.options().get(i).map(String::as_str),
        }
    }

    fn write_target(&mut self, text: String) -> Result<(), FieldError> {
        let index = self.selected;
        match self.target {
            EditTarget::Label => self.store.rename_label(index, text).map(|_| ()),
            EditTarget::Placeholder => self.store.rename_placeholder(index, text).map(|_| ()),
            EditTarget::Option(i) => self.store.set_option(index, i, text).map(|_| ()),
        }
    }

    /// Handle character input in the focused input
    pub fn input_char(&mut self, c: char) {
        let Some(mut text) = self.target_text().map(str::to_string) else {
            return;
        };
        text.push(c);
        if let Err(e) = self.write_target(text) {
            self.report(e);
        }
    }

    pub fn backspace(&mut self) {
        let Some(mut text) = self.target_text().map(str::to_string) else {
            return;
        };
        if text.pop().is_none() {
            return;
        }
        if let Err(e) = self.write_target(text) {
            self.report(e);
        }
    }

    /// Keyboard reorder: one drag gesture moving the selected field by one slot
    pub fn move_selected(&mut self, down: bool) {
        let to = if down {
            self.selected + 1
        } else if let Some(to) = self.selected.checked_sub(1) {
            to
        } else {
            return;
        };
        self.store.drag_start(self.selected);
        self.store.drag_over(to);
        if let Some(lifted) = self.store.lifted() {
            self.selected = lifted;
        }
        self.store.drag_end();
    }

    /// Pointer pressed on a card
    pub fn begin_drag(&mut self, index: usize) {
        self.store.drag_start(index);
        if self.store.lifted().is_some() {
            self.selected = index;
        }
    }

    /// Pointer moved over a card while pressed
    pub fn drag_to(&mut self, index: usize) {
        self.store.drag_over(index);
        if let Some(lifted) = self.store.lifted() {
            self.selected = lifted;
        }
    }

    pub fn end_drag(&mut self) {
        self.store.drag_end();
    }

    /// Keep the selected card on screen for a terminal of the given height
    pub fn scroll_into_view(&mut self, terminal_height: u16) {
        let viewport = ui_area::list_viewport_height(terminal_height, self.add_menu_open);
        self.first_visible = ui_area::scroll_to_show(
            self.store.fields(),
            self.selected,
            self.first_visible,
            viewport,
        );
    }

    pub fn report(&mut self, err: FieldError) {
        self.status_message = Some(err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(types: &[FieldType]) -> AppState {
        let mut state = AppState::default();
        for ty in types {
            state.add_field(*ty);
        }
        state
    }

    fn labels(state: &AppState) -> Vec<&str> {
        state.store.fields().iter().map(Field::label).collect()
    }

    mod selection {
        use super::*;

        #[test]
        fn test_default_is_empty() {
            let state = AppState::default();
            assert!(state.store.is_empty());
            assert_eq!(state.selected, 0);
            assert!(!state.add_menu_open);
            assert!(state.selected_field().is_none());
        }

        #[test]
        fn test_add_field_selects_new_field_and_closes_menu() {
            let mut state = state_with(&[FieldType::Text]);
            state.toggle_add_menu();
            state.add_field(FieldType::Radio);
            assert_eq!(state.selected, 1);
            assert!(!state.add_menu_open);
        }

        #[test]
        fn test_select_next_and_prev_clamp() {
            let mut state = state_with(&[FieldType::Text, FieldType::Text]);
            state.select_next();
            assert_eq!(state.selected, 1);
            state.select_prev();
            state.select_prev();
            assert_eq!(state.selected, 0);
        }

        #[test]
        fn test_select_resets_target() {
            let mut state = state_with(&[FieldType::Text, FieldType::Text]);
            state.select(0);
            state.next_target();
            state.select(1);
            assert_eq!(state.target, EditTarget::Label);
        }
    }

    mod targets {
        use super::*;

        #[test]
        fn test_text_field_targets() {
            let mut state = state_with(&[FieldType::Text]);
            state.next_target();
            assert_eq!(state.target, EditTarget::Placeholder);
            state.next_target();
            assert_eq!(state.target, EditTarget::Label);
        }

        #[test]
        fn test_choice_field_targets_wrap_backwards() {
            let mut state = state_with(&[FieldType::Checkbox]);
            state.add_option();
            state.prev_target();
            assert_eq!(state.target, EditTarget::Option(0));
            state.prev_target();
            assert_eq!(state.target, EditTarget::Label);
            state.prev_target();
            assert_eq!(state.target, EditTarget::Option(1));
        }

        #[test]
        fn test_cycle_without_fields_is_noop() {
            let mut state = AppState::default();
            state.next_target();
            assert_eq!(state.target, EditTarget::Label);
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn test_typing_edits_label() {
            let mut state = state_with(&[FieldType::Text]);
            state.backspace();
            state.input_char('!');
            assert_eq!(state.selected_field().unwrap().label(), "New Fiel!");
        }

        #[test]
        fn test_typing_edits_placeholder() {
            let mut state = state_with(&[FieldType::Text]);
            state.next_target();
            state.input_char('?');
            assert_eq!(
                state.selected_field().unwrap().placeholder(),
                Some("Add placeholder text?")
            );
        }

        #[test]
        fn test_typing_edits_option() {
            let mut state = state_with(&[FieldType::Radio]);
            state.next_target();
            state.backspace();
            state.input_char('A');
            assert_eq!(state.selected_field().unwrap().options(), ["Option A"]);
        }

        #[test]
        fn test_backspace_on_empty_label_is_noop() {
            let mut state = state_with(&[FieldType::Text]);
            state.store.rename_label(0, "").unwrap();
            state.backspace();
            assert_eq!(state.selected_field().unwrap().label(), "");
            assert!(state.status_message.is_none());
        }

        #[test]
        fn test_typing_without_fields_is_noop() {
            let mut state = AppState::default();
            state.input_char('x');
            assert!(state.store.is_empty());
        }

        #[test]
        fn test_add_option_moves_target() {
            let mut state = state_with(&[FieldType::Radio]);
            state.add_option();
            assert_eq!(state.target, EditTarget::Option(1));
            assert_eq!(state.target_text(), Some("Option 2"));
        }

        #[test]
        fn test_add_option_without_fields_reports_error() {
            let mut state = AppState::default();
            state.add_option();
            assert_eq!(
                state.status_message.as_deref(),
                Some("field index 0 out of range (len 0)")
            );
        }
    }

    mod delete {
        use super::*;

        #[test]
        fn test_delete_last_moves_selection_up() {
            let mut state = state_with(&[FieldType::Text, FieldType::Radio]);
            state.delete_selected();
            assert_eq!(state.selected, 0);
            assert_eq!(state.store.len(), 1);
        }

        #[test]
        fn test_delete_on_empty_reports_error() {
            let mut state = AppState::default();
            state.delete_selected();
            assert!(state.status_message.is_some());
        }
    }

    mod reorder {
        use super::*;

        fn named() -> AppState {
            let mut state = state_with(&[FieldType::Text, FieldType::Text, FieldType::Text]);
            for (i, name) in ["a", "b", "c"].into_iter().enumerate() {
                state.store.rename_label(i, name).unwrap();
            }
            state
        }

        #[test]
        fn test_move_selected_down_follows_field() {
            let mut state = named();
            state.select(0);
            state.move_selected(true);
            assert_eq!(labels(&state), vec!["b", "a", "c"]);
            assert_eq!(state.selected, 1);
            assert_eq!(state.store.lifted(), None);
        }

        #[test]
        fn test_move_selected_past_ends_is_noop() {
            let mut state = named();
            state.select(0);
            state.move_selected(false);
            state.select(2);
            state.move_selected(true);
            assert_eq!(labels(&state), vec!["a", "b", "c"]);
            assert_eq!(state.selected, 2);
        }

        #[test]
        fn test_mouse_drag_reorders_live() {
            let mut state = named();
            state.begin_drag(2);
            assert_eq!(state.selected, 2);
            state.drag_to(1);
            assert_eq!(labels(&state), vec!["a", "c", "b"]);
            state.drag_to(0);
            assert_eq!(labels(&state), vec!["c", "a", "b"]);
            assert_eq!(state.selected, 0);
            state.end_drag();
            assert_eq!(state.store.lifted(), None);
        }

        #[test]
        fn test_drag_to_without_begin_is_noop() {
            let mut state = named();
            state.drag_to(2);
            assert_eq!(labels(&state), vec!["a", "b", "c"]);
        }
    }

    #[test]
    fn test_scroll_into_view() {
        let mut state = state_with(&[FieldType::Text, FieldType::Text, FieldType::Text]);
        state.select(2);
        state.scroll_into_view(24);
        assert_eq!(state.first_visible, 1);
    }
}
