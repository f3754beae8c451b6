//! Bullet behavior. Bullets are pooled: leaving the screen or finishing the
//! impact animation parks them as `Inactive` until the next shot reuses them.

use glam::Vec2;

use crate::assets::prefabs::{clip, Prefabs};
use crate::components::entity::Entity;
use crate::components::kind::BulletState;
use crate::systems::behavior::{Intent, UpdateContext};

pub fn update(entity: &mut Entity, ctx: &mut UpdateContext) -> Intent {
    let state = entity.bullet_mut().state;
    match state {
        BulletState::Moving => {
            if !ctx.viewport.contains_point(entity.pos) {
                deactivate(entity);
            }
        }
        BulletState::Colliding => {
            if entity.animation().is_some_and(|anim| anim.is_done()) {
                deactivate(entity);
            }
        }
        BulletState::Inactive => {}
    }
    Intent::default()
}

fn deactivate(entity: &mut Entity) {
    entity.bullet_mut().state = BulletState::Inactive;
    entity.vel = Vec2::ZERO;
}

/// Stop a moving bullet and start its impact animation.
pub fn impact(entity: &mut Entity, prefabs: &Prefabs) {
    entity.bullet_mut().state = BulletState::Colliding;
    entity.vel = Vec2::ZERO;
    entity.sprite.texture = prefabs.sprites().bullet_hit;
    entity.play(clip::BULLET_HIT);
}

/// Rearm a pooled bullet as if freshly spawned.
pub fn rearm(entity: &mut Entity, prefabs: &Prefabs) {
    entity.bullet_mut().state = BulletState::Moving;
    entity.grounded = false;
    entity.sprite.texture = prefabs.sprites().bullet;
    entity.play(clip::BULLET_MOVING);
}

pub fn is_active(entity: &Entity) -> bool {
    entity
        .as_bullet()
        .is_some_and(|b| b.state != BulletState::Inactive)
}
