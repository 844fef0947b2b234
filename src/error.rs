//! Error types for scene configuration.
//!
//! The simulation itself cannot fail; only turning an external scene
//! description into a [`World`](crate::dynamics::World) can.

use thiserror::Error;

/// Errors that can occur while loading or validating a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene text is not valid JSON for a scene.
    #[error("Malformed scene description: {0}")]
    Parse(#[from] serde_json::Error),

    /// World width or height is not a positive finite number.
    #[error("Invalid world bounds: {width} x {height}")]
    InvalidBounds { width: f32, height: f32 },

    /// The scene asks for zero ticks per second.
    #[error("Frame rate must be at least 1")]
    ZeroFrameRate,

    /// A body has a negative or non-finite size.
    #[error("Body {index} has invalid size {width} x {height}")]
    InvalidBodySize { index: usize, width: f32, height: f32 },

    /// A body starts at a non-finite position or velocity.
    #[error("Body {index} has a non-finite position or velocity")]
    NonFiniteBody { index: usize },

    /// The player index does not name a body.
    #[error("Player index {index} out of range ({count} bodies)")]
    UnknownPlayer { index: usize, count: usize },
}

/// Result type for scene operations.
pub type SceneResult<T> = std::result::Result<T, SceneError>;
