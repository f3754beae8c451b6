//! Per-entity update: animation, gravity, kind behavior, facing,
//! acceleration and the horizontal speed clamp, in that order.

use glam::Vec2;

use crate::api::types::SoundEvent;
use crate::assets::prefabs::Prefabs;
use crate::components::entity::Entity;
use crate::components::kind::EntityKind;
use crate::core::rect::Rect;
use crate::input::state::InputState;
use crate::systems::{animation, bullet, enemy, player};

/// Read-only frame state a behavior can consult, plus the sound sink.
pub struct UpdateContext<'a> {
    pub dt: f32,
    pub input: &'a InputState,
    pub prefabs: &'a Prefabs,
    /// Player position at the time this entity is updated.
    pub player_pos: Option<Vec2>,
    pub viewport: Rect,
    pub sounds: &'a mut Vec<SoundEvent>,
}

/// What a behavior decided this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Intent {
    /// Desired horizontal direction: -1, 0 or 1.
    pub direction: f32,
    /// The entity wants a bullet spawned from it.
    pub fire: bool,
}

/// Advance one entity by one frame.
pub fn update_entity(entity: &mut Entity, ctx: &mut UpdateContext) -> Intent {
    let dt = ctx.dt;

    animation::tick_entity(entity, dt);

    if entity.dynamic {
        entity.vel.y += ctx.prefabs.config().gravity * entity.gravity_scale * dt;
    }

    let intent = match entity.kind() {
        EntityKind::Player => player::update(entity, ctx),
        EntityKind::Enemy => enemy::update(entity, ctx),
        EntityKind::Bullet => bullet::update(entity, ctx),
        EntityKind::Level => Intent::default(),
    };

    entity.set_direction(intent.direction);
    entity.vel += intent.direction * entity.accel * dt;
    entity.vel.x = entity.vel.x.clamp(-entity.max_speed_x, entity.max_speed_x);

    intent
}

/// Move `vx` toward zero by `amount` without crossing it.
pub(crate) fn decelerate(vx: f32, amount: f32) -> f32 {
    if vx.abs() <= amount {
        0.0
    } else {
        vx - vx.signum() * amount
    }
}
