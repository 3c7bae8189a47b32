//! Sparse, id-indexed entity storage.

use gamedatas_domain::EntityId;

/// Entities of one kind stored at the slot matching their declared id.
///
/// Slots for ids absent from the data file stay empty; the table never
/// fabricates a default entity. The slot vector always has exactly
/// `max_id + 1` entries, where `max_id` is the largest id inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityTable<T> {
    slots: Vec<Option<T>>,
    occupied: usize,
}

impl<T> Default for EntityTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityTable<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            occupied: 0,
        }
    }

    /// Empty table with room reserved for `hint` slots.
    ///
    /// Only a reservation: the table still grows to fit larger ids.
    pub fn with_capacity(hint: usize) -> Self {
        Self {
            slots: Vec::with_capacity(hint),
            occupied: 0,
        }
    }

    /// Place `entity` at `id`, growing the table when `id` is past the end.
    ///
    /// Returns the entity previously stored at `id`, if any.
    pub fn insert(&mut self, id: EntityId, entity: T) -> Option<T> {
        let index = id.index();
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        let previous = self.slots[index].replace(entity);
        if previous.is_none() {
            self.occupied += 1;
        }
        previous
    }

    /// Entity stored at `id`; `None` for holes and ids past the end.
    pub fn get(&self, id: impl Into<EntityId>) -> Option<&T> {
        self.slots.get(id.into().index()).and_then(Option::as_ref)
    }

    pub fn contains(&self, id: impl Into<EntityId>) -> bool {
        self.get(id).is_some()
    }

    /// Number of allocated slots, holes included.
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Occupied slots in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let entity = slot.as_ref()?;
            let id = u32::try_from(index).ok()?;
            Some((EntityId::new(id), entity))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_grows_to_fit_and_leaves_holes() {
        let mut table = EntityTable::with_capacity(2);
        assert!(table.insert(EntityId::new(4), "four").is_none());
        assert!(table.insert(EntityId::new(1), "one").is_none());

        assert_eq!(table.count(), 5);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(4u32), Some(&"four"));
        assert_eq!(table.get(1u32), Some(&"one"));
        for hole in [0u32, 2, 3] {
            assert!(table.get(hole).is_none());
        }
        assert!(table.get(5u32).is_none());
        assert!(table.get(u32::MAX).is_none());
    }

    #[test]
    fn insert_replaces_existing_entity() {
        let mut table = EntityTable::new();
        table.insert(EntityId::new(0), "first");
        let previous = table.insert(EntityId::new(0), "second");

        assert_eq!(previous, Some("first"));
        assert_eq!(table.get(0u32), Some(&"second"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.count(), 1);
    }

    #[test]
    fn iter_skips_holes_in_id_order() {
        let mut table = EntityTable::new();
        table.insert(EntityId::new(3), 'c');
        table.insert(EntityId::new(0), 'a');

        let ids: Vec<_> = table.iter().map(|(id, v)| (id.value(), *v)).collect();
        assert_eq!(ids, vec![(0, 'a'), (3, 'c')]);
    }

    #[test]
    fn empty_table_has_no_slots() {
        let table: EntityTable<u8> = EntityTable::new();
        assert_eq!(table.count(), 0);
        assert!(table.is_empty());
        assert!(table.get(0u32).is_none());
    }
}
