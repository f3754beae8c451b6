pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{AnimationConfig, BulletConfig, EnemyConfig, GameConfig, PlayerConfig};
pub use api::types::{EntityId, SoundEvent};
pub use assets::level::{LayerDesc, LevelDesc, SpawnDesc, TilesetRef};
pub use assets::prefabs::{clip, Prefabs};
pub use components::animation::{Animation, AnimationSpec};
pub use components::entity::Entity;
pub use components::kind::{
    BulletData, BulletState, EnemyData, EnemyState, EntityKind, KindData, PlayerData, PlayerState,
};
pub use components::sprite::{SpriteComponent, SpriteSet, TextureId};
pub use crate::core::rect::Rect;
pub use crate::core::scene::Scene;
pub use crate::core::time::Timer;
pub use crate::core::world::World;
pub use error::ConfigError;
pub use input::state::{Action, InputEvent, InputState};
pub use renderer::camera::Viewport;
pub use renderer::instance::{RenderBuffer, SpriteInstance};
pub use systems::combat::{apply_hit, HitOutcome};
pub use systems::debug::{collider_outlines, DebugRect, DebugShape};
pub use systems::render::build_render_buffer;
