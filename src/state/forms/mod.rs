//! Form builder domain layer
//!
//! The ordered list of field definitions and every operation that
//! transforms it. The UI only reads snapshots and calls into
//! [`FieldListStore`].

mod drag;
mod error;
mod field;
mod field_list;
mod id;

pub use error::FieldError;
pub use field::{Field, FieldType};
pub use field_list::FieldListStore;
