//! Enemy behavior: chase within aggro range, stun after hits, stay down
//! when dead. Hits themselves arrive through `combat::apply_hit`.

use crate::assets::prefabs::clip;
use crate::components::entity::Entity;
use crate::components::kind::EnemyState;
use crate::systems::behavior::{decelerate, Intent, UpdateContext};

pub fn update(entity: &mut Entity, ctx: &mut UpdateContext) -> Intent {
    let prefabs = ctx.prefabs;
    let cfg = &prefabs.config().enemy;
    let braking = cfg.deceleration_factor * entity.accel.x * ctx.dt;
    let mut direction = 0.0;

    let state = entity.enemy_mut().state;
    match state {
        EnemyState::Shambling => {
            if let Some(target) = ctx.player_pos {
                let to_player = target - entity.pos;
                if to_player.length() < cfg.aggro_radius {
                    direction = if to_player.x < 0.0 { -1.0 } else { 1.0 };
                }
            }
            if direction == 0.0 {
                entity.vel.x = decelerate(entity.vel.x, braking);
            }
        }
        EnemyState::Damaged => {
            entity.vel.x = decelerate(entity.vel.x, braking);
            if entity.enemy_mut().damaged_timer.step(ctx.dt) {
                entity.enemy_mut().state = EnemyState::Shambling;
                entity.sprite.texture = prefabs.sprites().enemy;
                entity.play(clip::ENEMY_SHAMBLE);
            }
        }
        EnemyState::Dead => {
            entity.vel.x = 0.0;
            if entity.animation().is_some_and(|anim| anim.is_done()) {
                entity.freeze_on(cfg.dead_frame);
            }
        }
    }

    Intent {
        direction,
        fire: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::game::GameConfig;
    use crate::assets::prefabs::Prefabs;
    use crate::components::sprite::SpriteSet;
    use crate::core::rect::Rect;
    use crate::input::state::InputState;
    use crate::systems::behavior::update_entity;
    use crate::systems::combat::apply_hit;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn prefabs() -> Prefabs {
        Prefabs::new(GameConfig::default(), SpriteSet::default()).unwrap()
    }

    fn step(entity: &mut Entity, prefabs: &Prefabs, player_pos: Option<Vec2>, dt: f32) {
        let input = InputState::new();
        let mut sounds = Vec::new();
        let mut ctx = UpdateContext {
            dt,
            input: &input,
            prefabs,
            player_pos,
            viewport: Rect::new(0.0, 0.0, 640.0, 320.0),
            sounds: &mut sounds,
        };
        update_entity(entity, &mut ctx);
    }

    fn state(entity: &Entity) -> EnemyState {
        entity.as_enemy().unwrap().state
    }

    #[test]
    fn chases_player_in_range() {
        let prefabs = prefabs();
        let mut e = prefabs.enemy(Vec2::new(100.0, 0.0));
        step(&mut e, &prefabs, Some(Vec2::new(40.0, 0.0)), DT);
        assert_eq!(e.direction(), -1.0);
        assert!(e.vel.x < 0.0);
        assert!(e.vel.x >= -15.0);
    }

    #[test]
    fn ignores_player_out_of_range_and_brakes() {
        let prefabs = prefabs();
        let mut e = prefabs.enemy(Vec2::new(100.0, 0.0)).with_vel(Vec2::new(10.0, 0.0));
        step(&mut e, &prefabs, Some(Vec2::new(500.0, 0.0)), DT);
        assert!(e.vel.x < 10.0);
        for _ in 0..10 {
            step(&mut e, &prefabs, Some(Vec2::new(500.0, 0.0)), DT);
        }
        assert_eq!(e.vel.x, 0.0);
        assert_eq!(e.direction(), 1.0);
    }

    #[test]
    fn damaged_recovers_after_cooldown() {
        let prefabs = prefabs();
        let mut e = prefabs.enemy(Vec2::ZERO);
        let mut sounds = Vec::new();
        apply_hit(&mut e, 1.0, &prefabs, &mut sounds);
        assert_eq!(state(&e), EnemyState::Damaged);

        // No chasing while stunned, even with the player right there.
        step(&mut e, &prefabs, Some(Vec2::new(10.0, 0.0)), 0.25);
        assert_eq!(state(&e), EnemyState::Damaged);
        assert_eq!(e.vel.x, 0.0);

        step(&mut e, &prefabs, Some(Vec2::new(10.0, 0.0)), 0.3);
        assert_eq!(state(&e), EnemyState::Shambling);
        assert_eq!(e.current_animation(), Some(clip::ENEMY_SHAMBLE));
    }

    #[test]
    fn dead_enemy_freezes_on_final_frame() {
        let prefabs = prefabs();
        let mut e = prefabs.enemy(Vec2::ZERO).with_vel(Vec2::new(12.0, 0.0));
        e.enemy_mut().health = 10;
        let mut sounds = Vec::new();
        apply_hit(&mut e, 1.0, &prefabs, &mut sounds);
        assert_eq!(state(&e), EnemyState::Dead);
        assert_eq!(e.current_animation(), Some(clip::ENEMY_DIE));

        step(&mut e, &prefabs, Some(Vec2::new(10.0, 0.0)), 1.0);
        assert_eq!(e.vel.x, 0.0);
        assert_eq!(e.current_animation(), Some(clip::ENEMY_DIE));

        step(&mut e, &prefabs, Some(Vec2::new(10.0, 0.0)), 1.1);
        assert_eq!(e.current_animation(), None);
        assert_eq!(e.frame_index(), 17);

        step(&mut e, &prefabs, Some(Vec2::new(10.0, 0.0)), 5.0);
        assert_eq!(state(&e), EnemyState::Dead);
        assert_eq!(e.frame_index(), 17);
        assert_eq!(e.vel.x, 0.0);
    }
}
