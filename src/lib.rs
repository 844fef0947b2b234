//! # sprite-lite-rs
//!
//! A small simulation of axis-aligned rectangular sprites on a bounded 2D
//! plane. Each tick every visible body, in insertion order:
//!
//! 1. applies axis flips other bodies requested,
//! 2. clamps itself to the world bound by its boundary [`Action`],
//! 3. finds overlapping bodies and resolves each contact by both sides'
//!    collision actions,
//! 4. integrates its velocity.
//!
//! Rendering, input and audio are left to the caller; see
//! `demos/brickbreaker.rs` for a macroquad front end.
//!
//! [`Action`]: dynamics::Action

pub mod collision;
pub mod dynamics;
pub mod error;
pub mod math;
pub mod scene;

pub use dynamics::{Action, Body, BodyDef, BodyHandle, World, WorldConfig};
pub use error::{SceneError, SceneResult};
pub use scene::SceneDef;
