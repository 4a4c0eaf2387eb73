//! Screen geometry for mouse event handling
//!
//! Card geometry lives here so the renderer and the mouse hit-testing
//! agree on where every field card and its inputs are.
//!
//! # Layout
//!
//! ```text
//! Row 0-2:  Header (3 rows with borders)
//! Row 3+:   Field cards, stacked, each card_height() rows
//! Bottom:   Add-field bar (3 rows, 6 with the menu open)
//!           Status bar (1 row)
//! ```

use super::forms::{Field, FieldType};

/// Height of the header (with borders: top + content + bottom)
pub const HEADER_HEIGHT: u16 = 3;
/// Height of the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;
/// Height of the "+ Add Field" button row
pub const ADD_BAR_HEIGHT: u16 = 3;
/// Height of the field type menu below the add button
pub const ADD_MENU_HEIGHT: u16 = 3;
/// Bordered single-line input
pub const INPUT_HEIGHT: u16 = 3;

/// Part of a field card under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRegion {
    /// Top or bottom border, used as the drag handle
    Border,
    Label,
    Placeholder,
    Option(usize),
    AddOption,
}

/// Smallest slice of a card worth drawing at the bottom edge
pub const MIN_PARTIAL_CARD: u16 = 3;

/// Rows a field card occupies, borders included. Saturates at `u16::MAX`.
pub fn card_height(field: &Field) -> u16 {
    let body = match field.field_type() {
        FieldType::Text => INPUT_HEIGHT,
        // One row per option plus the "+ Add Option" row
        FieldType::Radio | FieldType::Checkbox => u16::try_from(field.options().len())
            .unwrap_or(u16::MAX)
            .saturating_add(1),
    };
    body.saturating_add(2 + INPUT_HEIGHT)
}

/// Rows available for field cards
pub fn list_viewport_height(terminal_height: u16, menu_open: bool) -> u16 {
    let menu = if menu_open { ADD_MENU_HEIGHT } else { 0 };
    terminal_height.saturating_sub(HEADER_HEIGHT + ADD_BAR_HEIGHT + menu + STATUS_BAR_HEIGHT)
}

/// Whether an absolute row falls on the "+ Add Field" button row
pub fn add_bar_contains(terminal_height: u16, menu_open: bool, mouse_row: u16) -> bool {
    let top = HEADER_HEIGHT + list_viewport_height(terminal_height, menu_open);
    (top..top.saturating_add(ADD_BAR_HEIGHT)).contains(&mouse_row)
}

/// Region within one card for a row relative to the card's top.
///
/// `height` is the drawn height, which is less than [`card_height`] when
/// the card is cut off by the bottom of the list.
fn region_at(field: &Field, row: u16, height: u16) -> CardRegion {
    if row == 0 || row.saturating_add(1) >= height {
        return CardRegion::Border;
    }
    let row = row - 1;
    if row < INPUT_HEIGHT {
        return CardRegion::Label;
    }
    let row = (row - INPUT_HEIGHT) as usize;
    match field.field_type() {
        FieldType::Text => CardRegion::Placeholder,
        FieldType::Radio | FieldType::Checkbox => {
            if row < field.options().len() {
                CardRegion::Option(row)
            } else {
                CardRegion::AddOption
            }
        }
    }
}

/// Find the drawn card (and the part of it) under an absolute mouse row.
///
/// `first_visible` is the index of the topmost drawn card and `viewport`
/// the rows the card list occupies. Cards are laid out exactly as the
/// renderer stacks them, so rows outside the list or below the last drawn
/// card hit nothing.
pub fn card_at_row(
    fields: &[Field],
    first_visible: usize,
    viewport: u16,
    mouse_row: u16,
) -> Option<(usize, CardRegion)> {
    let row = mouse_row.checked_sub(HEADER_HEIGHT)?;
    if row >= viewport {
        return None;
    }
    let mut top: u16 = 0;
    for (index, field) in fields.iter().enumerate().skip(first_visible) {
        let remaining = viewport - top;
        if remaining < MIN_PARTIAL_CARD {
            break;
        }
        let height = card_height(field).min(remaining);
        if row < top + height {
            return Some((index, region_at(field, row - top, height)));
        }
        top += height;
    }
    None
}

/// Adjust the first drawn card so `selected` fits in `viewport` rows.
///
/// Walks upward from `selected` and stops as soon as the viewport is full,
/// so the cost is bounded by the viewport rather than the list length.
pub fn scroll_to_show(
    fields: &[Field],
    selected: usize,
    first_visible: usize,
    viewport: u16,
) -> usize {
    let Some(last) = fields.len().checked_sub(1) else {
        return 0;
    };
    let selected = selected.min(last);
    let floor = first_visible.min(selected);
    let viewport = usize::from(viewport);
    let mut first = selected;
    let mut used = usize::from(card_height(&fields[selected]));
    while first > floor {
        let above = usize::from(card_height(&fields[first - 1]));
        if used + above > viewport {
            break;
        }
        used += above;
        first -= 1;
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FieldListStore;

    fn fields(types: &[FieldType]) -> Vec<Field> {
        let mut store = FieldListStore::new();
        for ty in types {
            store.add_field(*ty);
        }
        store.fields().to_vec()
    }

    #[test]
    fn test_card_heights() {
        let f = fields(&[FieldType::Text, FieldType::Radio]);
        // border + label + placeholder + border
        assert_eq!(card_height(&f[0]), 8);
        // border + label + one option + add option + border
        assert_eq!(card_height(&f[1]), 7);
    }

    #[test]
    fn test_list_viewport_height() {
        assert_eq!(list_viewport_height(24, false), 17);
        assert_eq!(list_viewport_height(24, true), 14);
        assert_eq!(list_viewport_height(5, true), 0);
    }

    #[test]
    fn test_card_at_row_regions() {
        let f = fields(&[FieldType::Text, FieldType::Radio]);
        assert_eq!(card_at_row(&f, 0, 17, 2), None);
        assert_eq!(card_at_row(&f, 0, 17, 3), Some((0, CardRegion::Border)));
        assert_eq!(card_at_row(&f, 0, 17, 4), Some((0, CardRegion::Label)));
        assert_eq!(card_at_row(&f, 0, 17, 7), Some((0, CardRegion::Placeholder)));
        assert_eq!(card_at_row(&f, 0, 17, 10), Some((0, CardRegion::Border)));
        // Second card starts at row 11
        assert_eq!(card_at_row(&f, 0, 17, 11), Some((1, CardRegion::Border)));
        assert_eq!(card_at_row(&f, 0, 17, 15), Some((1, CardRegion::Option(0))));
        assert_eq!(card_at_row(&f, 0, 17, 16), Some((1, CardRegion::AddOption)));
        assert_eq!(card_at_row(&f, 0, 17, 17), Some((1, CardRegion::Border)));
        assert_eq!(card_at_row(&f, 0, 17, 18), None);
    }

    #[test]
    fn test_card_at_row_with_scroll() {
        let f = fields(&[FieldType::Text, FieldType::Radio]);
        assert_eq!(card_at_row(&f, 1, 17, 3), Some((1, CardRegion::Border)));
    }

    #[test]
    fn test_scroll_to_show() {
        let f = fields(&[FieldType::Text, FieldType::Text, FieldType::Text]);
        // Each card is 8 rows; a 17-row viewport fits two
        assert_eq!(scroll_to_show(&f, 1, 0, 17), 0);
        assert_eq!(scroll_to_show(&f, 2, 0, 17), 1);
        assert_eq!(scroll_to_show(&f, 0, 2, 17), 0);
    }

    #[test]
    fn test_scroll_to_show_tiny_viewport() {
        let f = fields(&[FieldType::Text, FieldType::Text]);
        assert_eq!(scroll_to_show(&f, 1, 0, 3), 1);
    }

    #[test]
    fn test_scroll_to_show_empty_list() {
        assert_eq!(scroll_to_show(&[], 0, 4, 10), 0);
    }

    #[test]
    fn test_card_at_row_stops_at_viewport() {
        let f = fields(&[FieldType::Text, FieldType::Text, FieldType::Text]);
        // Rows 3..=18 hold two cards; the third gets one row and is not drawn
        assert_eq!(card_at_row(&f, 0, 17, 18), Some((1, CardRegion::Border)));
        assert_eq!(card_at_row(&f, 0, 17, 19), None);
        // Add bar and status bar
        assert_eq!(card_at_row(&f, 0, 17, 21), None);
        assert_eq!(card_at_row(&f, 0, 17, 23), None);
    }

    #[test]
    fn test_card_at_row_clipped_card_ends_in_border() {
        let f = fields(&[FieldType::Text, FieldType::Text]);
        // Second card starts at row 11 and is cut to 4 rows (11..=14)
        assert_eq!(card_at_row(&f, 0, 12, 12), Some((1, CardRegion::Label)));
        assert_eq!(card_at_row(&f, 0, 12, 14), Some((1, CardRegion::Border)));
        assert_eq!(card_at_row(&f, 0, 12, 15), None);
    }

    #[test]
    fn test_add_bar_contains() {
        // 24 rows: list 3..=19, add bar 20..=22, status 23
        assert!(!add_bar_contains(24, false, 19));
        assert!(add_bar_contains(24, false, 20));
        assert!(add_bar_contains(24, false, 22));
        assert!(!add_bar_contains(24, false, 23));
        // Menu open shrinks the list by three rows
        assert!(add_bar_contains(24, true, 17));
    }

    #[test]
    fn test_card_height_saturates() {
        let mut store = FieldListStore::new();
        store.add_field(FieldType::Checkbox);
        for _ in 0..70_000 {
            store.add_option(0).unwrap();
        }
        assert_eq!(card_height(&store.fields()[0]), u16::MAX);
    }

    #[test]
    fn test_scroll_to_show_long_list() {
        let f = fields(&vec![FieldType::Text; 8_200]);
        assert_eq!(scroll_to_show(&f, 8_199, 0, 17), 8_198);
        assert_eq!(scroll_to_show(&f, 8_199, 8_199, 17), 8_199);
        // Scrolling back up lands on the selection
        assert_eq!(scroll_to_show(&f, 10, 8_198, 17), 10);
    }
}
