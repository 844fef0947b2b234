//! Heuristic bounce resolution between two overlapping bodies.
//!
//! The resolver classifies the contact from velocity signs and box-edge
//! proximity and reflects exactly one velocity axis of `sprite`, never both.

use tracing::trace;

use crate::collision::{Aabb, Axis};
use crate::dynamics::{Body, BodyHandle};
use crate::math::{Angle, opposed};

/// Which branch of [`resolve_bounce`] handled a contact.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BounceCase {
    /// `sprite` is static; nothing changed.
    Static,
    /// `sprite` was at rest and took `collided`'s heading.
    Absorbed,
    /// `collided` was a resting partner `sprite` had pushed; the record was consumed.
    Consumed(Axis),
    /// Both moving toward each other along `Axis`; `collided` got a deferred flip.
    Opposed(Axis),
    /// Both moving with no opposed axis.
    Graze,
    /// Fallback while still overlapping: flipped `sprite`'s dominant axis.
    Depth(Axis),
    /// Fallback after separation: axis picked from heading quadrant and edge distances.
    Heading(Axis),
}

pub fn resolve_bounce(
    sprite_handle: BodyHandle,
    sprite: &mut Body,
    collided_handle: BodyHandle,
    collided: &mut Body,
) -> BounceCase {
    if sprite.is_static() {
        return BounceCase::Static;
    }

    if !sprite.is_moving() {
        sprite.movement.add_vector(collided.movement.move_angle, 1.0);
        collided.record_stationary(sprite_handle);
        return BounceCase::Absorbed;
    }

    if sprite.consume_stationary(collided_handle) {
        let pushed = collided.velocity();
        if pushed.is_zero() {
            return depth_fallback(sprite, collided);
        }
        let axis = Axis::dominant(pushed);
        axis.flip(&mut sprite.movement.velocity);
        return BounceCase::Consumed(axis);
    }

    if collided.is_moving() {
        let (sv, cv) = (sprite.velocity(), collided.velocity());
        let axis = if opposed(sv.x, cv.x) {
            Axis::X
        } else if opposed(sv.y, cv.y) {
            Axis::Y
        } else {
            return BounceCase::Graze;
        };
        axis.flip(&mut sprite.movement.velocity);
        collided.request_flip(axis);
        return BounceCase::Opposed(axis);
    }

    depth_fallback(sprite, collided)
}

/// Re-tests the pair on its hit-boxes. A partner hidden earlier this tick
/// has its hit-box parked off-screen, so the overlap is gone and the face
/// is picked from the true geometry instead.
fn depth_fallback(sprite: &mut Body, collided: &Body) -> BounceCase {
    let (s, c) = (sprite.rect(), collided.rect());
    let penetration = s.penetration(&c);
    trace!(?penetration, "overlap re-test");

    if s.overlaps(&c) {
        let axis = Axis::dominant(sprite.velocity());
        axis.flip(&mut sprite.movement.velocity);
        return BounceCase::Depth(axis);
    }

    let axis = heading_axis(&sprite.aabb(), &collided.aabb(), sprite.movement.move_angle);
    axis.flip(&mut sprite.movement.velocity);
    BounceCase::Heading(axis)
}

/// Picks the axis to invert for a body heading along `heading` that has
/// already slipped past `collided`.
///
/// Each 90° quadrant names the leading vertical and horizontal edges of
/// `sprite`; the edge pair that is further apart is the one the body
/// slid along, so the other axis is the face it struck. Ties flip `x`.
pub fn heading_axis(sprite: &Aabb, collided: &Aabb, heading: Angle) -> Axis {
    let d = heading.normalized_degrees();

    let (dx, dy) = if d < 90.0 {
        ((sprite.right - collided.left).abs(), (sprite.bottom - collided.top).abs())
    } else if d < 180.0 {
        ((sprite.left - collided.right).abs(), (sprite.bottom - collided.top).abs())
    } else if d < 270.0 {
        ((sprite.left - collided.right).abs(), (sprite.top - collided.bottom).abs())
    } else {
        ((sprite.right - collided.left).abs(), (sprite.top - collided.bottom).abs())
    };

    if dx > dy { Axis::Y } else { Axis::X }
}
