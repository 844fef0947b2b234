pub mod aabb;
pub mod bounce;
pub mod pair;

pub use aabb::{Aabb, Axis, Penetration};
pub use bounce::{BounceCase, heading_axis, resolve_bounce};
pub use pair::PairKey;
