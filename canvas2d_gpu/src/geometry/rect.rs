/// Integer rectangle in device (pixel) space.

use glam::IVec2;

/// Axis-aligned integer rectangle stored as left/top/right/bottom edges.
///
/// Right and bottom are exclusive. A rectangle with `left >= right` or
/// `top >= bottom` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IRect {
    /// Build from edges
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Build from an origin and a size. Edges saturate at the `i32` range.
    pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            left: x,
            top: y,
            right: x.saturating_add(width),
            bottom: y.saturating_add(height),
        }
    }

    /// The empty rectangle at the origin
    pub const fn empty() -> Self {
        Self::from_ltrb(0, 0, 0, 0)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Whether `other` lies entirely inside this rectangle.
    ///
    /// Empty rectangles never contain and are never contained.
    pub fn contains(&self, other: &IRect) -> bool {
        !other.is_empty()
            && !self.is_empty()
            && self.left <= other.left
            && self.top <= other.top
            && self.right >= other.right
            && self.bottom >= other.bottom
    }

    /// Copy translated by `delta`, saturating at the `i32` range
    pub fn offset(&self, delta: IVec2) -> Self {
        Self {
            left: self.left.saturating_add(delta.x),
            top: self.top.saturating_add(delta.y),
            right: self.right.saturating_add(delta.x),
            bottom: self.bottom.saturating_add(delta.y),
        }
    }
}

#[cfg(test)]
#[path = "rect_tests.rs"]
mod tests;
