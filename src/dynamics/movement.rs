use crate::math::{Angle, Vec2};

/// Kinematic state of one body.
///
/// Other components steer a body by writing `velocity` directly between
/// calls to [`Movement::update`]. `update` derives `speed` and `move_angle`
/// from the velocity but never rewrites it, so such edits survive bit for bit.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Movement {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Reserved. Not integrated.
    pub acceleration: Vec2,
    speed: f32,
    pub move_angle: Angle,
    /// Display only.
    pub img_angle: Angle,
    pub is_static: bool,
}

impl Movement {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            speed: velocity.length(),
            move_angle: Angle::of_vector(velocity),
            ..Default::default()
        }
    }

    pub fn fixed(position: Vec2) -> Self {
        Self {
            is_static: true,
            ..Self::new(position, Vec2::ZERO)
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position.set(x, y);
    }

    /// Adds `thrust` along `angle` to the velocity.
    #[inline]
    pub fn add_vector(&mut self, angle: Angle, thrust: f32) {
        self.velocity += Vec2::from_angle(angle, thrust);
    }

    /// One Euler step of one tick.
    #[inline]
    pub fn update_position(&mut self) {
        self.position += self.velocity;
    }

    pub fn update(&mut self) {
        if self.is_static {
            return;
        }
        self.speed = self.velocity.length();
        self.move_angle = Angle::of_vector(self.velocity);
        self.update_position();
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        !self.velocity.is_zero()
    }
}
