use crate::math::{Size, Vec2};

// Screen-space box, y grows downward:
//
//   (left, top) ------------ (right, top)
//        |                        |
//        |         center         |
//        |                        |
//   (left, bottom) ------ (right, bottom)

/// Velocity component a resolution acts on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Axis with the larger magnitude in `v`. `y` wins ties.
    #[inline]
    pub fn dominant(v: Vec2) -> Self {
        if v.x.abs() > v.y.abs() { Axis::X } else { Axis::Y }
    }

    #[inline]
    pub fn flip(self, v: &mut Vec2) {
        match self {
            Axis::X => v.x = -v.x,
            Axis::Y => v.y = -v.y,
        }
    }
}

/// Axis-aligned bounding rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Which of `self`'s edges lie inside the other box.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Penetration {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Aabb {
    #[inline]
    pub fn from_center(center: Vec2, size: Size) -> Self {
        let h = size.half_extents();
        Self {
            left: center.x - h.x,
            right: center.x + h.x,
            top: center.y - h.y,
            bottom: center.y + h.y,
        }
    }

    /// Where a hidden body's hit-box is parked: entirely above and left of the origin.
    #[inline]
    pub fn offscreen(size: Size) -> Self {
        Self::from_center(Vec2::new(-size.width, -size.height), size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(0.5 * (self.left + self.right), 0.5 * (self.top + self.bottom))
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Tested by the complement: two boxes overlap unless one lies wholly
    /// beyond an edge of the other. Shared edges count as overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(self.bottom < other.top
            || self.top > other.bottom
            || self.right < other.left
            || self.left > other.right)
    }

    pub fn penetration(&self, other: &Aabb) -> Penetration {
        if !self.overlaps(other) {
            return Penetration::default();
        }
        let inside_x = |x: f32| x >= other.left && x <= other.right;
        let inside_y = |y: f32| y >= other.top && y <= other.bottom;
        Penetration {
            top: inside_y(self.top),
            bottom: inside_y(self.bottom),
            left: inside_x(self.left),
            right: inside_x(self.right),
        }
    }
}
