//! Declarative scene descriptions.
//!
//! A scene is the world configuration plus the initial bodies, in the order
//! they are inserted. That order is the update order, so two scenes with the
//! same bodies listed differently can play out differently.
//!
//! ```
//! use sprite_lite_rs::scene::SceneDef;
//!
//! let scene = SceneDef::from_json(r#"{
//!     "title": "Pong",
//!     "width": 640, "height": 480,
//!     "bodies": [
//!         { "size": { "width": 12, "height": 12 },
//!           "position": { "x": 320, "y": 240 },
//!           "velocity": { "x": 4, "y": 2 },
//!           "boundary": "bounce", "collision": "bounce" }
//!     ]
//! }"#).unwrap();
//!
//! let world = scene.build().unwrap();
//! assert_eq!(world.bodies.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dynamics::{BodyDef, BodyHandle, World, WorldConfig};
use crate::error::{SceneError, SceneResult};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDef {
    #[serde(flatten)]
    pub config: WorldConfig,
    /// Index into `bodies` of the player-controlled body.
    pub player: Option<usize>,
    pub bodies: Vec<BodyDef>,
}

impl SceneDef {
    pub fn from_json(text: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn validate(&self) -> SceneResult<()> {
        let (width, height) = (self.config.width, self.config.height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SceneError::InvalidBounds { width, height });
        }
        if self.config.frame_rate == 0 {
            return Err(SceneError::ZeroFrameRate);
        }

        for (index, def) in self.bodies.iter().enumerate() {
            let size = def.size;
            if !(size.width.is_finite() && size.height.is_finite())
                || size.width < 0.0
                || size.height < 0.0
            {
                return Err(SceneError::InvalidBodySize {
                    index,
                    width: size.width,
                    height: size.height,
                });
            }
            let finite = [def.position.x, def.position.y, def.velocity.x, def.velocity.y]
                .iter()
                .all(|v| v.is_finite());
            if !finite {
                return Err(SceneError::NonFiniteBody { index });
            }
        }

        if let Some(index) = self.player {
            if index >= self.bodies.len() {
                return Err(SceneError::UnknownPlayer {
                    index,
                    count: self.bodies.len(),
                });
            }
        }
        Ok(())
    }

    /// Validates the scene and inserts its bodies into a fresh world.
    pub fn build(&self) -> SceneResult<World> {
        self.validate()?;

        let mut world = World::with_config(self.config.clone());
        for def in &self.bodies {
            world.create_body(*def);
        }
        world.set_player(self.player.map(BodyHandle));

        info!(
            title = %self.config.title,
            bodies = self.bodies.len(),
            width = self.config.width,
            height = self.config.height,
            "scene built"
        );
        Ok(world)
    }
}
