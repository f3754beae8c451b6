use serde::{Deserialize, Serialize};

/// Opaque handle to a texture owned by the host's asset loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Sprite component — which texture an entity is drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Texture (sprite sheet) the frames come from.
    pub texture: TextureId,
    /// Frame drawn when the entity has no active animation.
    pub static_frame: u32,
}

impl SpriteComponent {
    pub fn new(texture: TextureId) -> Self {
        Self {
            texture,
            static_frame: 0,
        }
    }

    pub fn with_static_frame(mut self, frame: u32) -> Self {
        self.static_frame = frame;
        self
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self::new(TextureId(0))
    }
}

/// Texture handles for every visual the simulation switches between.
/// The host resolves these after loading its textures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSet {
    pub player_idle: TextureId,
    pub player_run: TextureId,
    pub player_slide: TextureId,
    pub enemy: TextureId,
    pub enemy_hit: TextureId,
    pub enemy_die: TextureId,
    pub bullet: TextureId,
    pub bullet_hit: TextureId,
}

impl Default for SpriteSet {
    fn default() -> Self {
        Self {
            player_idle: TextureId(0),
            player_run: TextureId(1),
            player_slide: TextureId(2),
            enemy: TextureId(3),
            enemy_hit: TextureId(4),
            enemy_die: TextureId(5),
            bullet: TextureId(6),
            bullet_hit: TextureId(7),
        }
    }
}
