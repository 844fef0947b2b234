use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collision::{Aabb, Axis};
use crate::dynamics::{Action, BodyHandle, Movement};
use crate::math::{Angle, Size, Vec2};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyDef {
    pub size: Size,
    /// Center of the body.
    pub position: Vec2,
    pub velocity: Vec2,
    pub is_static: bool,
    pub boundary: Action,
    pub collision: Action,
    pub visible: bool,
    /// Non-physical scenery, never part of a collision.
    pub backdrop: bool,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            size: Size::default(),
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            is_static: false,
            boundary: Action::Stop,
            collision: Action::PassThrough,
            visible: true,
            backdrop: false,
        }
    }
}

/// Axis inversions another body asked for, applied at the top of this body's next pass.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PendingFlip {
    pub x: bool,
    pub y: bool,
}

impl PendingFlip {
    #[inline]
    pub fn request(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.x = true,
            Axis::Y => self.y = true,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !self.x && !self.y
    }
}

#[derive(Clone, Debug)]
pub struct Body {
    pub size: Size,
    pub movement: Movement,

    pub boundary: Action,
    pub collision: Action,
    pub backdrop: bool,

    visible: bool,
    entered_world: bool,
    rect: Aabb,

    // Partners this body pushed while they were at rest.
    stationary_collisions: BTreeSet<BodyHandle>,
    pending_flip: PendingFlip,
}

impl Body {
    pub fn from_def(def: BodyDef) -> Self {
        debug_assert!(def.size.width >= 0.0 && def.size.height >= 0.0);

        let mut movement = Movement::new(def.position, def.velocity);
        movement.is_static = def.is_static;

        let mut body = Self {
            size: def.size,
            movement,
            boundary: def.boundary,
            collision: def.collision,
            backdrop: def.backdrop,
            visible: def.visible,
            entered_world: false,
            rect: Aabb::default(),
            stationary_collisions: BTreeSet::new(),
            pending_flip: PendingFlip::default(),
        };
        body.refresh_rect();
        body
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Makes the body invisible and parks its hit-box off the playable area.
    /// The true position stays in `movement`.
    pub fn hide(&mut self) {
        self.visible = false;
        self.rect = Aabb::offscreen(self.size);
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.refresh_rect();
    }

    #[inline]
    pub fn has_entered_world(&self) -> bool {
        self.entered_world
    }

    #[inline]
    pub(crate) fn enter_world(&mut self) {
        self.entered_world = true;
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.movement.is_static
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.movement.is_moving()
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.movement.velocity
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.movement.position
    }

    /// Hit-box derived from the current position.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.movement.position, self.size)
    }

    /// Hit-box used for display and overlap re-tests. It follows the body
    /// after integration and clamping, and is parked off-screen while hidden.
    #[inline]
    pub fn rect(&self) -> Aabb {
        self.rect
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.movement.position
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.aabb().left
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.aabb().right
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.aabb().top
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.aabb().bottom
    }

    pub fn distance_to(&self, other: &Body) -> f32 {
        (other.center() - self.center()).length()
    }

    /// Heading from this body's center toward `other`'s.
    pub fn angle_to(&self, other: &Body) -> Angle {
        Angle::of_vector(other.center() - self.center())
    }

    /// Overlap test between two live bodies. Identity is the caller's concern.
    pub fn collides_with(&self, other: &Body) -> bool {
        self.visible
            && other.visible
            && self.entered_world
            && other.entered_world
            && !self.backdrop
            && !other.backdrop
            && self.aabb().overlaps(&other.aabb())
    }

    /// Clamps the body against `[0, width] x [0, height]` according to its boundary action.
    ///
    /// Returns `true` when any edge was breached.
    pub fn check_bounds(&mut self, bounds: Size) -> bool {
        let Vec2 { mut x, mut y } = self.movement.position;
        let (w, h) = (bounds.width, bounds.height);

        let top = y < 0.0;
        let bottom = y > h;
        let left = x < 0.0;
        let right = x > w;

        if !(top || bottom || left || right) {
            return false;
        }

        if self.boundary == Action::Wrap {
            if top {
                y = h;
            } else if bottom {
                y = 0.0;
            }
            if left {
                x = w;
            } else if right {
                x = 0.0;
            }
        } else {
            y = y.clamp(0.0, h);
            x = x.clamp(0.0, w);
        }

        match self.boundary {
            Action::Die => {
                debug!(x, y, "body left the world and died");
                self.hide();
            }
            Action::Bounce => {
                let v = &mut self.movement.velocity;
                if top || bottom {
                    v.y = -v.y;
                }
                if left || right {
                    v.x = -v.x;
                }
            }
            _ => {}
        }

        self.movement.set_position(x, y);
        self.refresh_rect();
        true
    }

    /// Applies and clears any flip other bodies requested.
    pub fn apply_pending_flip(&mut self) {
        let flip = core::mem::take(&mut self.pending_flip);
        if flip.x {
            Axis::X.flip(&mut self.movement.velocity);
        }
        if flip.y {
            Axis::Y.flip(&mut self.movement.velocity);
        }
    }

    #[inline]
    pub fn pending_flip(&self) -> PendingFlip {
        self.pending_flip
    }

    #[inline]
    pub(crate) fn request_flip(&mut self, axis: Axis) {
        self.pending_flip.request(axis);
    }

    #[inline]
    pub fn stationary_collisions(&self) -> &BTreeSet<BodyHandle> {
        &self.stationary_collisions
    }

    #[inline]
    pub(crate) fn record_stationary(&mut self, partner: BodyHandle) {
        self.stationary_collisions.insert(partner);
    }

    /// Removes `partner` from the bookkeeping, returning whether it was present.
    #[inline]
    pub(crate) fn consume_stationary(&mut self, partner: BodyHandle) -> bool {
        self.stationary_collisions.remove(&partner)
    }

    /// Integrates motion and refreshes the display rectangle.
    pub fn integrate(&mut self) {
        self.movement.update();
        if self.visible {
            self.refresh_rect();
        }
    }

    fn refresh_rect(&mut self) {
        self.rect = if self.visible {
            self.aabb()
        } else {
            Aabb::offscreen(self.size)
        };
    }
}
