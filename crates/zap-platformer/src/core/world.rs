use glam::Vec2;

use crate::api::game::GameConfig;
use crate::api::types::{EntityId, SoundEvent};
use crate::assets::prefabs::Prefabs;
use crate::components::entity::Entity;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::state::InputState;
use crate::renderer::camera::Viewport;
use crate::systems::frame;

/// Everything the simulation owns: the entity arena, its ordered layers,
/// the bullet pool, the designated player and the camera.
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) scene: Scene,
    /// Draw/update order. Layer entities are also the collision obstacles.
    pub(crate) layers: Vec<Vec<EntityId>>,
    /// Recycled, never shrinks.
    pub(crate) bullets: Vec<EntityId>,
    pub(crate) player: Option<EntityId>,
    pub viewport: Viewport,
    pub(crate) prefabs: Prefabs,
    pub(crate) rng: Rng,
    /// Sound cues raised during the most recent frame.
    pub(crate) sounds: Vec<SoundEvent>,
    pub(crate) frame: u64,
}

impl World {
    pub fn new(prefabs: Prefabs) -> Self {
        let config = prefabs.config();
        Self {
            scene: Scene::new(),
            layers: Vec::new(),
            bullets: Vec::new(),
            player: None,
            viewport: Viewport::new(config.viewport_width, config.viewport_height),
            rng: Rng::new(config.seed),
            prefabs,
            sounds: Vec::new(),
            frame: 0,
        }
    }

    /// Append an empty layer and return its index.
    pub fn add_layer(&mut self) -> usize {
        self.layers.push(Vec::new());
        self.layers.len() - 1
    }

    /// Add an entity to `layer`, creating layers up to it if needed.
    pub fn spawn(&mut self, layer: usize, entity: Entity) -> EntityId {
        if layer >= self.layers.len() {
            self.layers.resize_with(layer + 1, Vec::new);
        }
        let id = self.scene.spawn(entity);
        self.layers[layer].push(id);
        id
    }

    /// Spawn the player prefab and make it the designated player.
    pub fn spawn_player(&mut self, layer: usize, pos: Vec2) -> EntityId {
        let entity = self.prefabs.player(pos);
        let id = self.spawn(layer, entity);
        self.player = Some(id);
        id
    }

    pub fn spawn_enemy(&mut self, layer: usize, pos: Vec2) -> EntityId {
        let entity = self.prefabs.enemy(pos);
        self.spawn(layer, entity)
    }

    /// Designate an existing entity as the player.
    pub fn set_player(&mut self, id: EntityId) {
        self.player = Some(id);
    }

    /// Remove an entity from the world. Bullets are recycled, not despawned,
    /// during play; this exists for level editing and tests.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let entity = self.scene.despawn(id)?;
        for layer in &mut self.layers {
            layer.retain(|&e| e != id);
        }
        self.bullets.retain(|&e| e != id);
        if self.player == Some(id) {
            self.player = None;
        }
        Some(entity)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.scene.get(id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.scene.get_mut(id)
    }

    pub fn player_id(&self) -> Option<EntityId> {
        self.player
    }

    pub fn player(&self) -> Option<&Entity> {
        self.player.and_then(|id| self.scene.get(id))
    }

    pub fn layers(&self) -> &[Vec<EntityId>] {
        &self.layers
    }

    /// Every bullet slot ever allocated, active or not.
    pub fn bullets(&self) -> &[EntityId] {
        &self.bullets
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn prefabs(&self) -> &Prefabs {
        &self.prefabs
    }

    pub fn config(&self) -> &GameConfig {
        self.prefabs.config()
    }

    /// Sound cues raised during the last `advance_frame`.
    pub fn sounds(&self) -> &[SoundEvent] {
        &self.sounds
    }

    /// Number of frames that advanced simulated time (`dt > 0`).
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Run one simulation tick over every entity.
    pub fn advance_frame(&mut self, dt: f32, input: &InputState) {
        frame::advance_frame(self, dt, input);
    }

    /// Fire a bullet from `origin`, reusing an inactive slot when one exists.
    pub fn spawn_bullet(&mut self, origin: EntityId) -> EntityId {
        frame::spawn_bullet(self, origin)
    }
}
