use crate::math::Vec2;

/// An angle stored in radians.
///
/// Headings follow screen orientation: 0° points along +x and 90° along +y,
/// which is downward on screen.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    #[inline]
    pub const fn from_radians(radians: f32) -> Self {
        Self { radians }
    }

    #[inline]
    pub fn from_degrees(degrees: f32) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Heading of `v`. The zero vector maps to 0.
    #[inline]
    pub fn of_vector(v: Vec2) -> Self {
        if v.is_zero() {
            return Self::default();
        }
        Self::from_radians(v.y.atan2(v.x))
    }

    #[inline]
    pub fn radians(self) -> f32 {
        self.radians
    }

    #[inline]
    pub fn degrees(self) -> f32 {
        self.radians.to_degrees()
    }

    /// Degrees folded into `[0, 360)`.
    pub fn normalized_degrees(self) -> f32 {
        let d = self.degrees().rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs.
        if d >= 360.0 { 0.0 } else { d }
    }

    #[inline]
    pub fn cos(self) -> f32 {
        self.radians.cos()
    }

    #[inline]
    pub fn sin(self) -> f32 {
        self.radians.sin()
    }
}
