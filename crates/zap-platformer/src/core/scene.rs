use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Slot arena of entities addressed by `EntityId`.
/// Designed for small-to-medium entity counts (hundreds, not millions).
/// Despawning leaves a hole so existing handles never shift.
#[derive(Debug, Clone)]
pub struct Scene {
    slots: Vec<Option<Entity>>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(256),
        }
    }

    /// Create a scene with a specific entity capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Add an entity to the scene and return its handle.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.slots.len() as u32);
        self.slots.push(Some(entity));
        id
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        self.slots.get_mut(id.index()).and_then(Option::take)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Mutable access to two distinct live entities at once.
    /// Returns None if either is missing; panics if `a == b`.
    pub fn pair_mut(&mut self, a: EntityId, b: EntityId) -> Option<(&mut Entity, &mut Entity)> {
        assert_ne!(a, b, "pair_mut needs two distinct entities");
        let (lo, hi, swapped) = if a < b { (a, b, false) } else { (b, a, true) };
        if hi.index() >= self.slots.len() {
            return None;
        }
        let (head, tail) = self.slots.split_at_mut(hi.index());
        let first = head[lo.index()].as_mut()?;
        let second = tail[0].as_mut()?;
        Some(if swapped { (second, first) } else { (first, second) })
    }

    /// Iterate over all live entities with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (EntityId(i as u32), e)))
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
