//! Axis-aligned bounding box collision
//!
//! Every entity in the arena is a rectangle anchored at its top-left corner.
//! All pairwise interactions (bullet vs enemy, player vs power-up, ...) go
//! through [`intersects`].

use glam::Vec2;
use serde::Serialize;

/// An axis-aligned box: top-left corner plus extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Right/bottom corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// True iff the two boxes overlap on both axes.
///
/// Half-open intervals: boxes that merely share an edge do not intersect.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    let (a_max, b_max) = (a.max(), b.max());
    a.pos.x < b_max.x && a_max.x > b.pos.x && a.pos.y < b_max.y && a_max.y > b.pos.y
}

/// True if `pos` lies outside the closed box `[0, width] x [0, height]`
#[inline]
pub fn outside_field(pos: Vec2, width: f32, height: f32) -> bool {
    pos.x < 0.0 || pos.x > width || pos.y < 0.0 || pos.y > height
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_boxes() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(intersects(&a, &b));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let right = Rect::new(50.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 50.0, 10.0, 10.0);
        assert!(!intersects(&a, &right));
        assert!(!intersects(&a, &below));
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(10.0, 100.0, 10.0, 10.0);
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_contained_box() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(intersects(&outer, &inner));
        assert!(intersects(&inner, &outer));
    }

    #[test]
    fn test_outside_field() {
        assert!(!outside_field(Vec2::new(0.0, 0.0), 800.0, 600.0));
        assert!(!outside_field(Vec2::new(800.0, 600.0), 800.0, 600.0));
        assert!(outside_field(Vec2::new(-0.1, 10.0), 800.0, 600.0));
        assert!(outside_field(Vec2::new(10.0, 600.5), 800.0, 600.0));
    }

    proptest! {
        #[test]
        fn intersects_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..200.0, ah in 0.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..200.0, bh in 0.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
        }
    }
}
