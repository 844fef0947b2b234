pub mod angle;
pub mod size;
pub mod utils;
pub mod vec2;

pub use angle::Angle;
pub use size::Size;
pub use utils::opposed;
pub use vec2::Vec2;
