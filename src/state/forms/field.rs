//! Form field value objects

use super::error::FieldError;
use super::id::FieldId;
use std::str::FromStr;

/// Label given to every new field
pub const DEFAULT_LABEL: &str = "New Field";
/// Placeholder given to new text fields
pub const DEFAULT_PLACEHOLDER: &str = "Add placeholder text";

/// The fixed set of field kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Radio,
    Checkbox,
}

impl FieldType {
    /// Menu order
    pub const ALL: [FieldType; 3] = [FieldType::Text, FieldType::Radio, FieldType::Checkbox];

    /// Whether the field carries a list of options
    pub fn is_choice(self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text Field",
            Self::Radio => "Radio Button",
            Self::Checkbox => "Checkbox",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
        }
    }

    /// Marker drawn in front of each option
    pub fn option_marker(self) -> &'static str {
        match self {
            Self::Radio => "( )",
            Self::Checkbox => "[ ]",
            Self::Text => "",
        }
    }
}

impl FromStr for FieldType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "radio" => Ok(Self::Radio),
            "checkbox" => Ok(Self::Checkbox),
            _ => Err(FieldError::UnknownFieldType {
                name: s.to_string(),
            }),
        }
    }
}

/// One question of the form being built.
///
/// Identity and type are fixed at creation; only the store mutates the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    id: FieldId,
    field_type: FieldType,
    label: String,
    placeholder: Option<String>,
    options: Vec<String>,
}

impl Field {
    /// Create a field with the defaults for its type
    pub(crate) fn new(id: FieldId, field_type: FieldType) -> Self {
        Self {
            id,
            field_type,
            label: DEFAULT_LABEL.to_string(),
            placeholder: (field_type == FieldType::Text).then(|| DEFAULT_PLACEHOLDER.to_string()),
            options: if field_type.is_choice() {
                vec![option_name(0)]
            } else {
                Vec::new()
            },
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    pub(crate) fn set_placeholder(&mut self, placeholder: String) {
        self.placeholder = Some(placeholder);
    }

    pub(crate) fn option_mut(&mut self, index: usize) -> Option<&mut String> {
        self.options.get_mut(index)
    }

    /// Append the next numbered option and return its name
    pub(crate) fn push_option(&mut self) -> &str {
        let name = option_name(self.options.len());
        self.options.push(name);
        &self.options[self.options.len() - 1]
    }
}

/// Option names follow the current count, so numbering can repeat
fn option_name(existing: usize) -> String {
    format!("Option {}", existing + 1)
}
