//! The ordered field list and the store that owns it

use super::drag::DragSession;
use super::error::{FieldError, Result};
use super::field::{Field, FieldType};
use super::id::{IdSource, UuidIdSource};
use std::fmt;

/// Ordered sequence of fields; position is display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList(Vec<Field>);

impl FieldList {
    pub fn as_slice(&self) -> &[Field] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Field> {
        self.0.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Field> {
        let len = self.0.len();
        self.0
            .get_mut(index)
            .ok_or_else(|| FieldError::field_index(index, len))
    }

    fn push(&mut self, field: Field) {
        self.0.push(field);
    }

    fn remove(&mut self, index: usize) -> Result<Field> {
        if index >= self.0.len() {
            return Err(FieldError::field_index(index, self.0.len()));
        }
        Ok(self.0.remove(index))
    }

    /// Take the field at `from` out and reinsert it so it lands at `to`.
    /// Both indices must be in bounds.
    fn move_field(&mut self, from: usize, to: usize) {
        if from < to {
            self.0[from..=to].rotate_left(1);
        } else if to < from {
            self.0[to..=from].rotate_right(1);
        }
    }
}

/// Single owner of the field list and of the drag marker.
///
/// Every mutation either applies completely and returns the new sequence or
/// fails with a [`FieldError`] leaving the list unchanged.
pub struct FieldListStore {
    fields: FieldList,
    drag: Option<DragSession>,
    ids: Box<dyn IdSource>,
}

impl fmt::Debug for FieldListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldListStore")
            .field("fields", &self.fields)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

impl Default for FieldListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldListStore {
    /// Empty store issuing random UUIDs
    pub fn new() -> Self {
        Self::with_id_source(Box::new(UuidIdSource))
    }

    pub fn with_id_source(ids: Box<dyn IdSource>) -> Self {
        Self {
            fields: FieldList::default(),
            drag: None,
            ids,
        }
    }

    /// Read-only snapshot for rendering
    pub fn fields(&self) -> &[Field] {
        self.fields.as_slice()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Position of the field currently being dragged, if any
    pub fn lifted(&self) -> Option<usize> {
        self.drag.map(|d| d.lifted)
    }

    /// Append a new field with the defaults for `field_type`
    pub fn add_field(&mut self, field_type: FieldType) -> &[Field] {
        let field = Field::new(self.ids.next_id(), field_type);
        tracing::debug!(
            id = %field.id(),
            field_type = field_type.name(),
            index = self.fields.len(),
            "field added"
        );
        self.fields.push(field);
        self.fields.as_slice()
    }

    /// Append a new field given its type name (`text`, `radio` or `checkbox`)
    pub fn add_field_named(&mut self, name: &str) -> Result<&[Field]> {
        let field_type = name
            .parse::<FieldType>()
            .inspect_err(|e| tracing::warn!("add field rejected: {e}"))?;
        Ok(self.add_field(field_type))
    }

    /// Remove the field at `index`; later fields shift left by one
    pub fn delete_field(&mut self, index: usize) -> Result<&[Field]> {
        let removed = self
            .fields
            .remove(index)
            .inspect_err(|e| tracing::warn!("delete rejected: {e}"))?;
        // Positions after `index` moved, so a lifted position is no longer valid
        if self.drag.take().is_some() {
            tracing::debug!("drag cancelled by delete");
        }
        tracing::debug!(id = %removed.id(), index, "field deleted");
        Ok(self.fields.as_slice())
    }

    /// Record `index` as the lifted field. An out-of-range index leaves no
    /// drag in progress.
    pub fn drag_start(&mut self, index: usize) {
        if index < self.fields.len() {
            self.drag = Some(DragSession::new(index));
            tracing::debug!(index, "drag started");
        } else {
            self.drag = None;
            tracing::warn!(index, len = self.fields.len(), "drag start out of range");
        }
    }

    /// Move the lifted field to `over` and follow it there.
    ///
    /// No-op without a drag, when `over` is the lifted position, or when
    /// `over` is out of range.
    pub fn drag_over(&mut self, over: usize) -> &[Field] {
        let Some(session) = self.drag.as_mut() else {
            return self.fields.as_slice();
        };
        if let Some(to) = session.target(over, self.fields.len()) {
            let from = session.lifted;
            self.fields.move_field(from, to);
            session.lifted = to;
            tracing::debug!(from, to, "field moved");
        }
        self.fields.as_slice()
    }

    /// Clear the lifted marker; the reorder is already applied
    pub fn drag_end(&mut self) {
        if let Some(session) = self.drag.take() {
            tracing::debug!(index = session.lifted, "drag ended");
        }
    }

    pub fn rename_label(&mut self, index: usize, label: impl Into<String>) -> Result<&[Field]> {
        self.fields
            .get_mut(index)
            .inspect_err(|e| tracing::warn!("rename label rejected: {e}"))?
            .set_label(label.into());
        Ok(self.fields.as_slice())
    }

    /// Replace the placeholder. Accepted on every field type; only text
    /// fields show it.
    pub fn rename_placeholder(
        &mut self,
        index: usize,
        placeholder: impl Into<String>,
    ) -> Result<&[Field]> {
        self.fields
            .get_mut(index)
            .inspect_err(|e| tracing::warn!("rename placeholder rejected: {e}"))?
            .set_placeholder(placeholder.into());
        Ok(self.fields.as_slice())
    }

    pub fn set_option(
        &mut self,
        field_index: usize,
        option_index: usize,
        value: impl Into<String>,
    ) -> Result<&[Field]> {
        let field = self
            .fields
            .get_mut(field_index)
            .inspect_err(|e| tracing::warn!("set option rejected: {e}"))?;
        let len = field.options().len();
        let option = field.option_mut(option_index).ok_or_else(|| {
            let err = FieldError::option_index(option_index, len);
            tracing::warn!("set option rejected: {err}");
            err
        })?;
        *option = value.into();
        Ok(self.fields.as_slice())
    }

    /// Append `"Option N"` where N is the current option count plus one
    pub fn add_option(&mut self, field_index: usize) -> Result<&[Field]> {
        let field = self
            .fields
            .get_mut(field_index)
            .inspect_err(|e| tracing::warn!("add option rejected: {e}"))?;
        let id = field.id();
        let name = field.push_option();
        tracing::debug!(%id, option = name, "option added");
        Ok(self.fields.as_slice())
    }
}
