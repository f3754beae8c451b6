//! Per-kind state carried by an `Entity`.
//!
//! `KindData` is the only place kind-specific fields live, so the kind tag
//! and the state variant can never disagree.

use crate::core::time::Timer;

/// Discriminant of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Level,
    Enemy,
    Bullet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Running,
    Jumping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyState {
    #[default]
    Shambling,
    Damaged,
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletState {
    #[default]
    Moving,
    Colliding,
    Inactive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerData {
    pub state: PlayerState,
    /// Gates firing; a shot is allowed only once this has timed out.
    pub weapon_timer: Timer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnemyData {
    pub state: EnemyState,
    /// Time spent in `Damaged` before returning to `Shambling`.
    pub damaged_timer: Timer,
    pub health: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulletData {
    pub state: BulletState,
}

/// Kind-specific data. Exactly one variant is live per entity.
#[derive(Debug, Clone, PartialEq)]
pub enum KindData {
    Player(PlayerData),
    Level,
    Enemy(EnemyData),
    Bullet(BulletData),
}

impl KindData {
    pub fn kind(&self) -> EntityKind {
        match self {
            KindData::Player(_) => EntityKind::Player,
            KindData::Level => EntityKind::Level,
            KindData::Enemy(_) => EntityKind::Enemy,
            KindData::Bullet(_) => EntityKind::Bullet,
        }
    }
}
