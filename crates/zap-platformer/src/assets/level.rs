use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::prefabs::Prefabs;
use crate::components::sprite::TextureId;
use crate::core::rect::Rect;
use crate::core::world::World;
use crate::error::ConfigError;

/// Already-parsed tile map. Map file parsing belongs to the host; this is
/// the resolved shape it hands over (JSON-compatible with Tiled exports).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDesc {
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    /// Tile size in pixels. Must match `GameConfig::tile_size`.
    #[serde(default = "default_tile_px")]
    pub tile_width: u32,
    #[serde(default = "default_tile_px")]
    pub tile_height: u32,
    #[serde(default)]
    pub tilesets: Vec<TilesetRef>,
    /// Drawn and updated in order; later layers are on top.
    pub layers: Vec<LayerDesc>,
}

/// Maps a range of tile ids onto a host texture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TilesetRef {
    /// First global tile id covered by this tileset.
    pub firstgid: u32,
    pub texture: TextureId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerDesc {
    /// Row-major tile ids, `width * height` long. 0 = empty cell.
    Tiles { name: String, data: Vec<u32> },
    /// Spawn points.
    Objects { name: String, objects: Vec<SpawnDesc> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnDesc {
    #[serde(default)]
    pub name: String,
    /// `"player"` or `"enemy"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Bottom-left corner, as tile objects are anchored.
    pub x: f32,
    pub y: f32,
}

fn default_tile_px() -> u32 {
    32
}

impl LevelDesc {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Map extent in world units.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.width as f32 * self.tile_width as f32,
            self.height as f32 * self.tile_height as f32,
        )
    }

    /// Texture and frame for a non-zero tile id: the tileset with the
    /// largest `firstgid` not above `gid` owns it.
    fn resolve_gid(&self, gid: u32) -> Option<(TextureId, u32)> {
        self.tilesets
            .iter()
            .filter(|ts| ts.firstgid <= gid)
            .max_by_key(|ts| ts.firstgid)
            .map(|ts| (ts.texture, gid - ts.firstgid))
    }

    fn player_spawns(&self) -> usize {
        self.layers
            .iter()
            .map(|layer| match layer {
                LayerDesc::Objects { objects, .. } => {
                    objects.iter().filter(|o| o.kind == "player").count()
                }
                LayerDesc::Tiles { .. } => 0,
            })
            .sum()
    }

    /// Number of cells in a tile layer, if the map fits in memory and in
    /// world coordinates.
    fn cell_count(&self) -> Result<usize, ConfigError> {
        let fits = self.width.checked_mul(self.tile_width).is_some()
            && self.height.checked_mul(self.tile_height).is_some();
        self.width
            .checked_mul(self.height)
            .filter(|_| fits)
            .and_then(|cells| usize::try_from(cells).ok())
            .ok_or_else(|| {
                ConfigError::InvalidConfig(format!(
                    "level of {}x{} tiles is too large",
                    self.width, self.height
                ))
            })
    }

    fn check(&self, prefabs: &Prefabs) -> Result<(), ConfigError> {
        let tile = prefabs.config().tile_size;
        if self.tile_width as f32 != tile || self.tile_height as f32 != tile {
            return Err(ConfigError::InvalidConfig(format!(
                "level tiles are {}x{}, config tile_size is {}",
                self.tile_width, self.tile_height, tile
            )));
        }
        match self.player_spawns() {
            0 => Err(ConfigError::MissingPlayer),
            1 => Ok(()),
            _ => Err(ConfigError::DuplicatePlayer),
        }
    }

    /// Instantiate the level: one world layer per map layer, tiles as
    /// static Level entities, spawn objects as players and enemies.
    pub fn build(&self, prefabs: &Prefabs) -> Result<World, ConfigError> {
        self.check(prefabs)?;
        let expected = self.cell_count()?;

        let mut world = World::new(prefabs.clone());
        let tile = prefabs.config().tile_size;
        let (mut tiles, mut enemies) = (0usize, 0usize);

        for layer in &self.layers {
            let layer_idx = world.add_layer();
            match layer {
                LayerDesc::Tiles { name, data } => {
                    if data.len() != expected {
                        return Err(ConfigError::LayerSizeMismatch {
                            layer: name.clone(),
                            expected,
                            actual: data.len(),
                        });
                    }
                    for (cell, &gid) in data.iter().enumerate() {
                        if gid == 0 {
                            continue;
                        }
                        let (texture, frame) = self
                            .resolve_gid(gid)
                            .ok_or_else(|| ConfigError::UnknownTile {
                                layer: name.clone(),
                                gid,
                            })?;
                        let col = cell as u32 % self.width;
                        let row = cell as u32 / self.width;
                        let pos = Vec2::new(col as f32 * tile, row as f32 * tile);
                        let entity = prefabs.tile(pos, texture, frame);
                        world.spawn(layer_idx, entity);
                        tiles += 1;
                    }
                }
                LayerDesc::Objects { objects, .. } => {
                    for obj in objects {
                        let pos = Vec2::new(obj.x, obj.y - tile);
                        match obj.kind.as_str() {
                            "player" => {
                                world.spawn_player(layer_idx, pos);
                            }
                            "enemy" => {
                                world.spawn_enemy(layer_idx, pos);
                                enemies += 1;
                            }
                            other => return Err(ConfigError::UnknownSpawn(other.to_string())),
                        }
                    }
                }
            }
        }

        world.viewport.set_bounds(self.bounds());
        if let Some(x) = world.player().map(|p| p.pos.x + p.size.x * 0.5) {
            world.viewport.follow_x(x);
        }
        log::info!(
            "level built: {}x{} tiles, {} layers, {} solid tiles, {} enemies",
            self.width,
            self.height,
            self.layers.len(),
            tiles,
            enemies
        );
        Ok(world)
    }
}
