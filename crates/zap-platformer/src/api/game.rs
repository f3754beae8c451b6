use serde::{Deserialize, Serialize};

use crate::components::animation::AnimationSpec;
use crate::core::rect::Rect;
use crate::error::ConfigError;

/// Tuning for the simulation, provided by the host (or loaded from JSON).
/// Every field has a default, so a JSON file only needs the overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Downward acceleration in px/s² (Y grows down).
    pub gravity: f32,
    /// Edge length of one map tile in world units.
    pub tile_size: f32,
    /// Camera rectangle width in world units.
    pub viewport_width: f32,
    /// Camera rectangle height in world units.
    pub viewport_height: f32,
    /// Upper bound on a single frame's dt. None disables clamping.
    /// Must keep a bullet's per-frame travel inside an enemy's hitbox.
    pub max_frame_dt: Option<f32>,
    /// Overlaps thinner than this on either axis are ignored.
    pub collision_epsilon: f32,
    /// Length of the white hit flash on enemies.
    pub flash_duration: f32,
    /// Seed for muzzle jitter.
    pub seed: u64,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub bullet: BulletConfig,
    pub animations: AnimationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_speed_x: f32,
    pub acceleration: f32,
    /// Upward speed applied instantly on jump.
    pub jump_speed: f32,
    /// Idle braking as a multiple of `acceleration`.
    pub deceleration_factor: f32,
    /// Horizontal speed after bumping into an enemy.
    pub knockback_speed: f32,
    /// Minimum seconds between shots.
    pub weapon_cooldown: f32,
    pub collider: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub max_speed_x: f32,
    pub acceleration: f32,
    /// Distance within which an enemy chases the player.
    pub aggro_radius: f32,
    pub health: i32,
    /// Seconds an enemy stays stunned after a hit.
    pub damaged_cooldown: f32,
    /// Frame of the death strip shown once the death animation ends.
    pub dead_frame: u32,
    /// Braking while idle, as a multiple of `acceleration`.
    pub deceleration_factor: f32,
    pub collider: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    /// Speed added along the shooter's facing.
    pub muzzle_speed: f32,
    pub max_speed_x: f32,
    /// Health removed from an enemy per hit.
    pub damage: i32,
    /// Full width of the random vertical launch speed range.
    pub jitter: f32,
    /// Spawn X offset from the shooter when facing left.
    pub spawn_offset_left: f32,
    /// Spawn X offset from the shooter when facing right.
    pub spawn_offset_right: f32,
    pub spawn_offset_y: f32,
    pub size: f32,
    pub collider: Rect,
}

/// Frame strips for every animated visual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub player_idle: AnimationSpec,
    pub player_run: AnimationSpec,
    pub player_slide: AnimationSpec,
    pub enemy_shamble: AnimationSpec,
    pub enemy_hit: AnimationSpec,
    pub enemy_die: AnimationSpec,
    pub bullet_moving: AnimationSpec,
    pub bullet_hit: AnimationSpec,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: 500.0,
            tile_size: 32.0,
            viewport_width: 640.0,
            viewport_height: 320.0,
            max_frame_dt: Some(1.0 / 60.0),
            collision_epsilon: 0.01,
            flash_duration: 0.05,
            seed: 0x5eed,
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
            bullet: BulletConfig::default(),
            animations: AnimationConfig::default(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_speed_x: 100.0,
            acceleration: 300.0,
            jump_speed: 200.0,
            deceleration_factor: 1.5,
            knockback_speed: 100.0,
            weapon_cooldown: 0.1,
            collider: Rect::new(11.0, 6.0, 10.0, 26.0),
        }
    }
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            max_speed_x: 15.0,
            acceleration: 300.0,
            aggro_radius: 100.0,
            health: 100,
            damaged_cooldown: 0.5,
            dead_frame: 17,
            deceleration_factor: 1.5,
            collider: Rect::new(10.0, 4.0, 12.0, 28.0),
        }
    }
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            muzzle_speed: 600.0,
            max_speed_x: 1000.0,
            damage: 10,
            jitter: 40.0,
            spawn_offset_left: 0.0,
            spawn_offset_right: 24.0,
            spawn_offset_y: 16.0,
            size: 8.0,
            collider: Rect::new(0.0, 0.0, 8.0, 8.0),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            player_idle: AnimationSpec::new(8, 1.6),
            player_run: AnimationSpec::new(4, 0.5),
            player_slide: AnimationSpec::new(1, 1.0),
            enemy_shamble: AnimationSpec::new(8, 1.0),
            enemy_hit: AnimationSpec::new(8, 1.0),
            enemy_die: AnimationSpec::new(18, 2.0),
            bullet_moving: AnimationSpec::new(4, 0.05),
            bullet_hit: AnimationSpec::new(4, 0.15),
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidConfig(format!("{name} must be positive, got {value}")))
            }
        }
        fn non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidConfig(format!("{name} must not be negative, got {value}")))
            }
        }

        positive("tile_size", self.tile_size)?;
        positive("viewport_width", self.viewport_width)?;
        positive("viewport_height", self.viewport_height)?;
        non_negative("gravity", self.gravity)?;
        non_negative("collision_epsilon", self.collision_epsilon)?;
        if let Some(max_dt) = self.max_frame_dt {
            positive("max_frame_dt", max_dt)?;
        }

        non_negative("player.max_speed_x", self.player.max_speed_x)?;
        non_negative("player.acceleration", self.player.acceleration)?;
        non_negative("player.jump_speed", self.player.jump_speed)?;
        non_negative("player.deceleration_factor", self.player.deceleration_factor)?;
        non_negative("player.knockback_speed", self.player.knockback_speed)?;

        non_negative("enemy.max_speed_x", self.enemy.max_speed_x)?;
        non_negative("enemy.acceleration", self.enemy.acceleration)?;
        non_negative("enemy.aggro_radius", self.enemy.aggro_radius)?;
        non_negative("enemy.deceleration_factor", self.enemy.deceleration_factor)?;
        if self.enemy.health <= 0 {
            return Err(ConfigError::InvalidConfig(format!(
                "enemy.health must be positive, got {}",
                self.enemy.health
            )));
        }
        if self.enemy.dead_frame >= self.animations.enemy_die.frames {
            return Err(ConfigError::InvalidConfig(format!(
                "enemy.dead_frame {} is past the death strip ({} frames)",
                self.enemy.dead_frame, self.animations.enemy_die.frames
            )));
        }

        non_negative("bullet.max_speed_x", self.bullet.max_speed_x)?;
        non_negative("bullet.jitter", self.bullet.jitter)?;
        positive("bullet.size", self.bullet.size)?;
        if self.bullet.damage <= 0 {
            return Err(ConfigError::InvalidConfig(format!(
                "bullet.damage must be positive, got {}",
                self.bullet.damage
            )));
        }
        if let Some(max_dt) = self.max_frame_dt {
            // Overlap window of a bullet crossing an enemy collider.
            let window = self.enemy.collider.w + self.bullet.collider.w;
            let step = (self.bullet.muzzle_speed + self.player.max_speed_x) * max_dt;
            if step >= window {
                return Err(ConfigError::InvalidConfig(format!(
                    "bullets travel {step:.1} per frame at max_frame_dt {max_dt}, \
                     enemy hit window is {window:.1}"
                )));
            }
        }
        // Cooldowns and clip lengths are checked when their timers are built.
        Ok(())
    }
}
