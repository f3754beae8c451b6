use glam::Vec2;

use crate::api::game::GameConfig;
use crate::components::animation::Animation;
use crate::components::entity::Entity;
use crate::components::kind::{
    BulletData, BulletState, EnemyData, EnemyState, KindData, PlayerData, PlayerState,
};
use crate::components::sprite::{SpriteComponent, SpriteSet, TextureId};
use crate::core::rect::Rect;
use crate::core::time::Timer;
use crate::error::ConfigError;

/// Animation slots per kind, in the order prefabs attach them.
pub mod clip {
    pub const PLAYER_IDLE: usize = 0;
    pub const PLAYER_RUN: usize = 1;
    pub const PLAYER_SLIDE: usize = 2;

    pub const ENEMY_SHAMBLE: usize = 0;
    pub const ENEMY_HIT: usize = 1;
    pub const ENEMY_DIE: usize = 2;

    pub const BULLET_MOVING: usize = 0;
    pub const BULLET_HIT: usize = 1;
}

/// Validated config plus ready-made animation and timer templates.
/// Every entity the simulation creates is stamped out from here, so a bad
/// clip length or cooldown is caught once, before any entity exists.
#[derive(Debug, Clone)]
pub struct Prefabs {
    config: GameConfig,
    sprites: SpriteSet,
    player_clips: Vec<Animation>,
    enemy_clips: Vec<Animation>,
    bullet_clips: Vec<Animation>,
    weapon_timer: Timer,
    damaged_timer: Timer,
    flash_timer: Timer,
}

impl Prefabs {
    pub fn new(config: GameConfig, sprites: SpriteSet) -> Result<Self, ConfigError> {
        config.validate()?;
        let anims = &config.animations;
        let player_clips = vec![
            anims.player_idle.build()?,
            anims.player_run.build()?,
            anims.player_slide.build()?,
        ];
        let enemy_clips = vec![
            anims.enemy_shamble.build()?,
            anims.enemy_hit.build()?,
            anims.enemy_die.build()?,
        ];
        let bullet_clips = vec![anims.bullet_moving.build()?, anims.bullet_hit.build()?];

        Ok(Self {
            weapon_timer: Timer::expired(config.player.weapon_cooldown)?,
            damaged_timer: Timer::new(config.enemy.damaged_cooldown)?,
            flash_timer: Timer::new(config.flash_duration)?,
            config,
            sprites,
            player_clips,
            enemy_clips,
            bullet_clips,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    fn tile_size(&self) -> Vec2 {
        Vec2::splat(self.config.tile_size)
    }

    pub fn player(&self, pos: Vec2) -> Entity {
        let cfg = &self.config.player;
        Entity::new(KindData::Player(PlayerData {
            state: PlayerState::Idle,
            weapon_timer: self.weapon_timer.clone(),
        }))
        .with_pos(pos)
        .with_accel(Vec2::new(cfg.acceleration, 0.0))
        .with_max_speed_x(cfg.max_speed_x)
        .with_collider(cfg.collider)
        .with_dynamic(true)
        .with_size(self.tile_size())
        .with_sprite(SpriteComponent::new(self.sprites.player_idle))
        .with_animations(self.player_clips.clone())
    }

    pub fn enemy(&self, pos: Vec2) -> Entity {
        let cfg = &self.config.enemy;
        Entity::new(KindData::Enemy(EnemyData {
            state: EnemyState::Shambling,
            damaged_timer: self.damaged_timer.clone(),
            health: cfg.health,
        }))
        .with_pos(pos)
        .with_accel(Vec2::new(cfg.acceleration, 0.0))
        .with_max_speed_x(cfg.max_speed_x)
        .with_collider(cfg.collider)
        .with_dynamic(true)
        .with_size(self.tile_size())
        .with_sprite(SpriteComponent::new(self.sprites.enemy))
        .with_animations(self.enemy_clips.clone())
        .with_flash(self.flash_timer.clone())
    }

    /// A fresh bullet in the `Moving` state at the origin. The spawner places it.
    pub fn bullet(&self) -> Entity {
        let cfg = &self.config.bullet;
        Entity::new(KindData::Bullet(BulletData {
            state: BulletState::Moving,
        }))
        .with_max_speed_x(cfg.max_speed_x)
        .with_collider(cfg.collider)
        .with_dynamic(true)
        .with_gravity_scale(0.0)
        .with_size(Vec2::splat(cfg.size))
        .with_sprite(SpriteComponent::new(self.sprites.bullet))
        .with_animations(self.bullet_clips.clone())
    }

    /// A static, solid map tile drawn with a fixed frame of `texture`.
    pub fn tile(&self, pos: Vec2, texture: TextureId, frame: u32) -> Entity {
        let size = self.tile_size();
        Entity::new(KindData::Level)
            .with_pos(pos)
            .with_collider(Rect::from_min_size(Vec2::ZERO, size))
            .with_size(size)
            .with_sprite(SpriteComponent::new(texture).with_static_frame(frame))
    }
}
