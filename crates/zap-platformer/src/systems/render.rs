use crate::components::entity::Entity;
use crate::components::kind::EntityKind;
use crate::core::rect::Rect;
use crate::core::world::World;
use crate::renderer::camera::Viewport;
use crate::renderer::instance::{RenderBuffer, SpriteInstance};
use crate::systems::bullet;

/// Build the frame's draw list: layers in order, then live bullets on top.
/// Entities outside the viewport are culled.
pub fn build_render_buffer(world: &World, buffer: &mut RenderBuffer) {
    buffer.clear();

    let layered = world.layers().iter().flatten();
    let bullets = world
        .bullets()
        .iter()
        .filter(|&&id| world.get(id).is_some_and(bullet::is_active));

    for &id in layered.chain(bullets) {
        let Some(entity) = world.get(id) else {
            continue;
        };
        if let Some(instance) = sprite_instance(entity, &world.viewport) {
            buffer.push(instance);
        }
    }
}

fn sprite_instance(entity: &Entity, viewport: &Viewport) -> Option<SpriteInstance> {
    let bounds = Rect::from_min_size(entity.pos, entity.size);
    if !viewport.is_rect_visible(&bounds) {
        return None;
    }

    let view = viewport.to_view(entity.pos);
    let mut flags = 0;
    if entity.direction() < 0.0 {
        flags |= SpriteInstance::FLAG_FLIP_X;
    }
    if entity.should_flash {
        flags |= SpriteInstance::FLAG_FLASH;
    }

    Some(SpriteInstance {
        x: view.x,
        y: view.y,
        w: entity.size.x,
        h: entity.size.y,
        texture: entity.sprite.texture.0,
        frame: entity.frame_index(),
        flags,
        kind: kind_code(entity.kind()),
    })
}

fn kind_code(kind: EntityKind) -> u32 {
    match kind {
        EntityKind::Player => 0,
        EntityKind::Level => 1,
        EntityKind::Enemy => 2,
        EntityKind::Bullet => 3,
    }
}
