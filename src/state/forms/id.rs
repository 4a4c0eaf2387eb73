//! Field identity

use std::fmt;
use uuid::Uuid;

/// Opaque, immutable identifier of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(Uuid);

impl FieldId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First group is plenty for log lines
        let s = self.0.to_string();
        write!(f, "{}", &s[..8])
    }
}

/// Source of fresh field ids, abstracted so tests can pin ids
#[cfg_attr(test, mockall::automock)]
pub trait IdSource {
    /// Produce an id never handed out before
    fn next_id(&mut self) -> FieldId;
}

/// Random v4 UUIDs
#[derive(Debug, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> FieldId {
        FieldId::from_uuid(Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_source_yields_distinct_ids() {
        let mut source = UuidIdSource;
        let ids: HashSet<FieldId> = (0..100).map(|_| source.next_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_display_is_short() {
        let id = FieldId::from_uuid(Uuid::from_u128(0x1234_5678_9abc_def0_1234_5678_9abc_def0));
        assert_eq!(id.to_string(), "12345678");
    }
}
