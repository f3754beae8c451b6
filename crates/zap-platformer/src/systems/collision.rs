//! Axis-separated AABB collision.
//!
//! A mover is tested against every obstacle after each axis move, in
//! container order. Each overlapping pair is handled by kind dispatch:
//! most pairs get the generic push-out, some only exchange velocity, and
//! bullets additionally trigger an impact.

use crate::api::types::{EntityId, SoundEvent};
use crate::assets::prefabs::Prefabs;
use crate::components::entity::Entity;
use crate::components::kind::{BulletState, EnemyState, EntityKind};
use crate::core::rect::Rect;
use crate::core::scene::Scene;
use crate::systems::{bullet, combat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Shared state for resolving one frame's collisions.
pub struct Collisions<'a> {
    pub prefabs: &'a Prefabs,
    pub sounds: &'a mut Vec<SoundEvent>,
    pub epsilon: f32,
}

/// Reaction chosen for a mover/obstacle pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Response {
    None,
    /// Push the mover out along the axis and zero that velocity component.
    Block,
    /// Player ran into an enemy: knock the player back, no push-out.
    PlayerKnockback,
    /// Enemy walked into the player: block the enemy, shove the player away.
    EnemyShove,
    /// Bullet struck something solid.
    BulletImpact { hit_enemy: bool },
}

fn is_dead_enemy(entity: &Entity) -> bool {
    entity.as_enemy().is_some_and(|e| e.state == EnemyState::Dead)
}

fn respond(mover: &Entity, obstacle: &Entity) -> Response {
    use EntityKind::*;

    let obstacle_dead = is_dead_enemy(obstacle);
    match (mover.kind(), obstacle.kind()) {
        (Bullet, Level) => match mover.as_bullet() {
            Some(b) if b.state == BulletState::Moving => Response::BulletImpact { hit_enemy: false },
            _ => Response::None,
        },
        (Bullet, Enemy) if !obstacle_dead => match mover.as_bullet() {
            Some(b) if b.state == BulletState::Moving => Response::BulletImpact { hit_enemy: true },
            _ => Response::None,
        },
        (Bullet, _) => Response::None,

        (Player, Enemy) if !obstacle_dead => Response::PlayerKnockback,
        (Enemy, Player) if !is_dead_enemy(mover) => Response::EnemyShove,

        (_, Level) => Response::Block,
        _ => Response::None,
    }
}

/// Resolve `mover` against each obstacle on one axis. The mover must
/// already have been moved along that axis. Returns true if the mover was
/// set down on top of a Level obstacle.
pub fn resolve_axis(
    scene: &mut Scene,
    mover: EntityId,
    obstacles: &[EntityId],
    axis: Axis,
    ctx: &mut Collisions,
) -> bool {
    let mut landed = false;
    for &other in obstacles {
        if other == mover {
            continue;
        }
        let Some((a, b)) = scene.pair_mut(mover, other) else {
            continue;
        };
        if !a.has_collider() || !b.has_collider() {
            continue;
        }
        if !a.collider_rect().overlaps(&b.collider_rect(), ctx.epsilon) {
            continue;
        }

        match respond(a, b) {
            Response::None => {}
            Response::Block => {
                landed |= push_out(a, b, axis);
            }
            Response::PlayerKnockback => {
                let knockback = ctx.prefabs.config().player.knockback_speed;
                a.vel.x = -a.direction() * knockback;
            }
            Response::EnemyShove => {
                push_out(a, b, axis);
                let knockback = ctx.prefabs.config().player.knockback_speed;
                let away = if b.collider_rect().center().x >= a.collider_rect().center().x {
                    1.0
                } else {
                    -1.0
                };
                b.vel.x = knockback * away;
            }
            Response::BulletImpact { hit_enemy } => {
                push_out(a, b, axis);
                bullet::impact(a, ctx.prefabs);
                if hit_enemy {
                    combat::apply_hit(b, a.direction(), ctx.prefabs, ctx.sounds);
                }
            }
        }
    }
    landed
}

/// Generic response: move `mover` flush against `obstacle` on `axis`,
/// opposite to its velocity, and zero that velocity component. Returns
/// true if the mover now rests on top of a Level obstacle.
fn push_out(mover: &mut Entity, obstacle: &Entity, axis: Axis) -> bool {
    let c = mover.collider;
    let ob = obstacle.collider_rect();

    match axis {
        Axis::X => {
            let toward_positive = if mover.vel.x != 0.0 {
                mover.vel.x > 0.0
            } else {
                mover.collider_rect().center().x < ob.center().x
            };
            mover.pos.x = if toward_positive {
                ob.x - c.x - c.w
            } else {
                ob.right() - c.x
            };
            mover.vel.x = 0.0;
            false
        }
        Axis::Y => {
            let toward_positive = if mover.vel.y != 0.0 {
                mover.vel.y > 0.0
            } else {
                mover.collider_rect().center().y < ob.center().y
            };
            mover.vel.y = 0.0;
            if toward_positive {
                mover.pos.y = ob.y - c.y - c.h;
                obstacle.kind() == EntityKind::Level
            } else {
                mover.pos.y = ob.bottom() - c.y;
                false
            }
        }
    }
}

/// One-pixel strip directly under an entity's collider.
pub fn ground_sensor(entity: &Entity) -> Rect {
    let r = entity.collider_rect();
    Rect::new(r.x, r.bottom(), r.w, 1.0)
}

/// True if any Level obstacle lies under the entity's feet.
pub fn sense_ground(scene: &Scene, mover: EntityId, obstacles: &[EntityId], epsilon: f32) -> bool {
    let Some(entity) = scene.get(mover) else {
        return false;
    };
    if !entity.has_collider() {
        return false;
    }
    let sensor = ground_sensor(entity);
    obstacles
        .iter()
        .filter(|&&id| id != mover)
        .filter_map(|&id| scene.get(id))
        .any(|ob| {
            ob.kind() == EntityKind::Level
                && ob.has_collider()
                && sensor.overlaps(&ob.collider_rect(), epsilon)
        })
}
