use rand::Rng;

use crate::math::Angle;

/// Strictly opposite signs. Zero opposes nothing.
#[inline]
pub fn opposed(a: f32, b: f32) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}

#[inline]
pub fn random_range(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    rng.gen_range(lo..=hi)
}

/// Uniform heading between `lo_degrees` and `hi_degrees`.
#[inline]
pub fn random_heading(rng: &mut impl Rng, lo_degrees: f32, hi_degrees: f32) -> Angle {
    Angle::from_degrees(random_range(rng, lo_degrees, hi_degrees))
}
