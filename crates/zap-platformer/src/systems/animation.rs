//! Animation system — advances the active clip and the hit flash.

use crate::components::entity::Entity;

/// Advance an entity's active animation and flash timer by `dt`.
/// Returns true if the active animation completed a pass this tick.
pub fn tick_entity(entity: &mut Entity, dt: f32) -> bool {
    let looped = entity.animation_mut().is_some_and(|anim| anim.step(dt));

    if entity.should_flash {
        match entity.flash_timer.as_mut() {
            Some(timer) => {
                if timer.step(dt) {
                    entity.should_flash = false;
                }
            }
            None => entity.should_flash = false,
        }
    }

    looped
}
