//! Drag gesture state

/// An in-progress drag of one field.
///
/// `lifted` always names the current position of the dragged field, since
/// every drag-over moves the field to the hovered slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub lifted: usize,
}

impl DragSession {
    pub fn new(lifted: usize) -> Self {
        Self { lifted }
    }

    /// Target of a move for a pointer over `over`, or `None` when nothing moves
    pub fn target(&self, over: usize, len: usize) -> Option<usize> {
        if over == self.lifted || over >= len || self.lifted >= len {
            None
        } else {
            Some(over)
        }
    }
}
