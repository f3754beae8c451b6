//! Debug overlay: opt-in collider visualization.
//!
//! Call `collider_outlines()` after `advance_frame` to see hitboxes and
//! ground sensors. Rectangles are in view space, ready to draw as lines.

use crate::core::rect::Rect;
use crate::core::world::World;
use crate::systems::{bullet, collision};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugShape {
    /// An entity's collision box.
    Collider,
    /// The strip under a dynamic entity probed for ground contact.
    GroundSensor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugRect {
    pub rect: Rect,
    pub shape: DebugShape,
    /// For sensors: whether the owner is grounded this frame.
    pub active: bool,
}

impl DebugRect {
    /// Closed outline (4 corners + first corner again).
    pub fn outline(&self) -> [[f32; 2]; 5] {
        let r = self.rect;
        [
            [r.x, r.y],
            [r.right(), r.y],
            [r.right(), r.bottom()],
            [r.x, r.bottom()],
            [r.x, r.y],
        ]
    }
}

/// Outlines for every visible collider, plus ground sensors of dynamic
/// layer entities. Inactive bullets are skipped.
pub fn collider_outlines(world: &World) -> Vec<DebugRect> {
    let viewport = &world.viewport;
    let mut out = Vec::new();

    let layered = world.layers().iter().flatten();
    let bullets = world
        .bullets()
        .iter()
        .filter(|&&id| world.get(id).is_some_and(bullet::is_active));

    for &id in layered.chain(bullets) {
        let Some(entity) = world.get(id) else {
            continue;
        };
        if !entity.has_collider() {
            continue;
        }
        let rect = entity.collider_rect();
        if !viewport.is_rect_visible(&rect) {
            continue;
        }
        out.push(DebugRect {
            rect: rect.translated(-viewport.rect.min()),
            shape: DebugShape::Collider,
            active: false,
        });

        if entity.dynamic && entity.gravity_scale != 0.0 {
            let sensor = collision::ground_sensor(entity);
            out.push(DebugRect {
                rect: sensor.translated(-viewport.rect.min()),
                shape: DebugShape::GroundSensor,
                active: entity.grounded,
            });
        }
    }
    out
}
