//! Damage resolution for bullet hits.

use crate::api::types::SoundEvent;
use crate::assets::prefabs::{clip, Prefabs};
use crate::components::entity::Entity;
use crate::components::kind::EnemyState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Target cannot be hurt (not an enemy, or already dead).
    Ignored,
    Damaged,
    Killed,
}

/// Damage `target` from an attacker facing `attacker_dir`. The target turns
/// to face the attacker, flashes, and either staggers or dies.
pub fn apply_hit(
    target: &mut Entity,
    attacker_dir: f32,
    prefabs: &Prefabs,
    sounds: &mut Vec<SoundEvent>,
) -> HitOutcome {
    match target.as_enemy() {
        Some(enemy) if enemy.state != EnemyState::Dead => {}
        _ => return HitOutcome::Ignored,
    }

    let damage = prefabs.config().bullet.damage;
    let sprites = prefabs.sprites();

    target.set_direction(-attacker_dir);
    target.should_flash = true;
    if let Some(timer) = target.flash_timer.as_mut() {
        timer.reset();
    }

    let enemy = target.enemy_mut();
    enemy.health -= damage;

    if enemy.health <= 0 {
        enemy.state = EnemyState::Dead;
        target.vel.x = 0.0;
        target.sprite.texture = sprites.enemy_die;
        target.play(clip::ENEMY_DIE);
        sounds.push(SoundEvent::EnemyDied);
        log::debug!("enemy killed at ({:.1}, {:.1})", target.pos.x, target.pos.y);
        HitOutcome::Killed
    } else {
        enemy.state = EnemyState::Damaged;
        enemy.damaged_timer.reset();
        target.sprite.texture = sprites.enemy_hit;
        target.play(clip::ENEMY_HIT);
        sounds.push(SoundEvent::EnemyHit);
        HitOutcome::Damaged
    }
}
