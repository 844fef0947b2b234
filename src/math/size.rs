use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Unrotated footprint of a body.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn half_extents(self) -> Vec2 {
        Vec2::new(0.5 * self.width, 0.5 * self.height)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}
