//! Player behavior: movement input, jumping, firing and the
//! Idle / Running / Jumping state machine.

use crate::assets::prefabs::clip;
use crate::components::entity::Entity;
use crate::components::kind::PlayerState;
use crate::components::sprite::SpriteSet;
use crate::input::state::{Action, InputState};
use crate::systems::behavior::{decelerate, Intent, UpdateContext};

pub fn update(entity: &mut Entity, ctx: &mut UpdateContext) -> Intent {
    let prefabs = ctx.prefabs;
    let cfg = &prefabs.config().player;
    let sprites = prefabs.sprites();
    let direction = ctx.input.move_axis();

    let fire = trigger_weapon(entity, ctx.input, ctx.dt);

    if ctx.input.is_active(Action::Jump) && entity.grounded {
        jump(entity, cfg.jump_speed);
    }

    let state = entity.player_mut().state;
    match state {
        PlayerState::Idle => {
            if direction != 0.0 {
                entity.player_mut().state = PlayerState::Running;
                show_running(entity, direction, sprites);
            } else {
                let amount = cfg.deceleration_factor * entity.accel.x * ctx.dt;
                entity.vel.x = decelerate(entity.vel.x, amount);
                entity.sprite.texture = sprites.player_idle;
                entity.set_animation(clip::PLAYER_IDLE);
            }
        }
        PlayerState::Running => {
            if direction == 0.0 {
                entity.player_mut().state = PlayerState::Idle;
                entity.sprite.texture = sprites.player_idle;
                entity.set_animation(clip::PLAYER_IDLE);
            } else {
                show_running(entity, direction, sprites);
            }
        }
        PlayerState::Jumping => {
            entity.sprite.texture = sprites.player_run;
            entity.set_animation(clip::PLAYER_RUN);
        }
    }

    Intent { direction, fire }
}

/// Step the weapon cooldown; returns true if a shot should be fired now.
fn trigger_weapon(entity: &mut Entity, input: &InputState, dt: f32) -> bool {
    let weapon = &mut entity.player_mut().weapon_timer;
    weapon.step(dt);
    if input.is_active(Action::Fire) && weapon.is_timeout() {
        weapon.reset();
        return true;
    }
    false
}

/// Instantaneous upward impulse; independent of dt.
fn jump(entity: &mut Entity, jump_speed: f32) {
    entity.player_mut().state = PlayerState::Jumping;
    entity.vel.y = -jump_speed;
}

/// Running visuals. Sliding is shown while grounded and still carrying
/// momentum against the requested direction.
fn show_running(entity: &mut Entity, direction: f32, sprites: &SpriteSet) {
    if entity.grounded && entity.vel.x * direction < 0.0 {
        entity.sprite.texture = sprites.player_slide;
        entity.set_animation(clip::PLAYER_SLIDE);
    } else {
        entity.sprite.texture = sprites.player_run;
        entity.set_animation(clip::PLAYER_RUN);
    }
}

/// Land a jumping player. Called by the ground sensor once the player is
/// supported and no longer rising.
pub fn land(entity: &mut Entity, sprites: &SpriteSet) {
    let Some(data) = entity.as_player() else {
        return;
    };
    if data.state == PlayerState::Jumping && entity.vel.y >= 0.0 {
        entity.player_mut().state = PlayerState::Running;
        entity.sprite.texture = sprites.player_run;
        entity.set_animation(clip::PLAYER_RUN);
    }
}
