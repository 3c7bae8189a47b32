use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable numeric identifier of a game-data entity.
///
/// Ids are unique within one data file but neither contiguous nor sorted;
/// the registry uses them directly as slot indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u32);

impl EntityId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Slot index of this id in an id-indexed table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<EntityId> for u32 {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_plain_integer() {
        let id: EntityId = serde_json::from_str("42").expect("integer id");
        assert_eq!(id, EntityId::new(42));
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn rejects_negative_integer() {
        assert!(serde_json::from_str::<EntityId>("-1").is_err());
    }
}
