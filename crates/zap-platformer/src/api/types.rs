/// Stable handle to an entity slot in the scene.
/// Slots are never reused for a different entity, so a handle stays valid
/// (or dangling) regardless of container growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl EntityId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Sound cue raised by the simulation. The host decides how (and whether)
/// to play it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    /// The player fired a bullet.
    Shoot,
    /// An enemy took damage and survived.
    EnemyHit,
    /// An enemy's health ran out.
    EnemyDied,
}
