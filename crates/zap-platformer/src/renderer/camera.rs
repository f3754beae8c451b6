use glam::Vec2;

use crate::core::rect::Rect;

/// Camera rectangle in world space (top-left anchored, Y down).
/// Used for bullet despawn and render culling; never a physics boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Visible region in world units.
    pub rect: Rect,
    /// Optional world bounds the viewport is kept inside.
    pub bounds: Option<Rect>,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, width, height),
            bounds: None,
        }
    }

    /// Set world bounds for camera clamping.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
        self.clamp_to_bounds();
    }

    /// Clear camera bounds (allow camera to move anywhere).
    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }

    /// Move the top-left corner, then apply bounds.
    pub fn move_to(&mut self, top_left: Vec2) {
        self.rect.x = top_left.x;
        self.rect.y = top_left.y;
        self.clamp_to_bounds();
    }

    /// Center horizontally on `target_x`, keeping the vertical position.
    pub fn follow_x(&mut self, target_x: f32) {
        self.rect.x = target_x - self.rect.w / 2.0;
        self.clamp_to_bounds();
    }

    fn clamp_to_bounds(&mut self) {
        let Some(b) = self.bounds else {
            return;
        };
        // Viewport larger than the bounds: pin to the bounds' origin.
        self.rect.x = if self.rect.w >= b.w {
            b.x
        } else {
            self.rect.x.clamp(b.x, b.right() - self.rect.w)
        };
        self.rect.y = if self.rect.h >= b.h {
            b.y
        } else {
            self.rect.y.clamp(b.y, b.bottom() - self.rect.h)
        };
    }

    /// Check if a world-space point is inside the viewport (edges included).
    pub fn is_visible(&self, point: Vec2) -> bool {
        self.rect.contains_point(point)
    }

    /// Check if a world-space rectangle overlaps the viewport.
    pub fn is_rect_visible(&self, rect: &Rect) -> bool {
        rect.right() >= self.rect.x
            && rect.x <= self.rect.right()
            && rect.bottom() >= self.rect.y
            && rect.y <= self.rect.bottom()
    }

    /// World position expressed relative to the viewport's top-left corner.
    pub fn to_view(&self, world: Vec2) -> Vec2 {
        world - self.rect.min()
    }
}
