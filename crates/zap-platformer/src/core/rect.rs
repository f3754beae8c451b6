use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, anchored at its top-left corner (Y grows down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self::new(min.x, min.y, size.x, size.y)
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// True if the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Same rectangle moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    /// Overlapping region of two rectangles, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right > left && bottom > top {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// Overlap test that ignores contacts thinner than `epsilon` on either
    /// axis, so touching edges never count as a collision.
    pub fn overlaps(&self, other: &Rect, epsilon: f32) -> bool {
        self.intersection(other)
            .is_some_and(|r| r.w > epsilon && r.h > epsilon)
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_of_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 6.0, 10.0, 10.0);
        assert_eq!(a.intersection(&b), Some(Rect::new(5.0, 6.0, 5.0, 4.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersection(&b).is_none());
        assert!(!a.overlaps(&b, 0.01));
    }

    #[test]
    fn sliver_below_epsilon_is_ignored() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.995, 0.0, 10.0, 10.0);
        assert!(a.intersection(&b).is_some());
        assert!(!a.overlaps(&b, 0.01));
    }

    #[test]
    fn empty_rect() {
        assert!(Rect::ZERO.is_empty());
        assert!(Rect::new(0.0, 0.0, 4.0, 0.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 4.0, 4.0).is_empty());
    }

    #[test]
    fn translated_and_center() {
        let r = Rect::new(11.0, 6.0, 10.0, 26.0).translated(Vec2::new(100.0, 50.0));
        assert_eq!(r, Rect::new(111.0, 56.0, 10.0, 26.0));
        assert_eq!(r.center(), Vec2::new(116.0, 69.0));
        assert_eq!(r.right(), 121.0);
        assert_eq!(r.bottom(), 82.0);
    }
}
