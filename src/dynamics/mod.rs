pub mod action;
pub mod body;
pub mod movement;
pub mod world;

pub use action::{Action, UnknownAction};
pub use body::{Body, BodyDef, PendingFlip};
pub use movement::Movement;
pub use world::{BodyHandle, World, WorldConfig, bodies_two_mut};
