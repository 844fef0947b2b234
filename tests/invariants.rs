//! Property-based tests for boundary and bounce invariants.

use proptest::prelude::*;

use sprite_lite_rs::collision::{BounceCase, resolve_bounce};
use sprite_lite_rs::dynamics::{Action, Body, BodyDef, BodyHandle, World};
use sprite_lite_rs::math::{Size, Vec2};

// =============================================================================
// Strategies
// =============================================================================

fn arb_bounds() -> impl Strategy<Value = Size> {
    (1.0f32..2000.0, 1.0f32..2000.0).prop_map(|(w, h)| Size::new(w, h))
}

/// Non-zero velocity component.
fn arb_component() -> impl Strategy<Value = f32> {
    prop_oneof![-20.0f32..-0.01, 0.01f32..20.0]
}

fn arb_velocity() -> impl Strategy<Value = Vec2> {
    (arb_component(), arb_component()).prop_map(|(x, y)| Vec2::new(x, y))
}

fn body(position: Vec2, velocity: Vec2, boundary: Action) -> BodyDef {
    BodyDef {
        size: Size::new(10.0, 10.0),
        position,
        velocity,
        boundary,
        collision: Action::Bounce,
        ..Default::default()
    }
}

// =============================================================================
// Boundary
// =============================================================================

proptest! {
    #[test]
    fn wrap_keeps_position_in_bounds(
        bounds in arb_bounds(),
        x in -3000.0f32..3000.0,
        y in -3000.0f32..3000.0,
    ) {
        let mut b = Body::from_def(body(Vec2::new(x, y), Vec2::ZERO, Action::Wrap));
        b.check_bounds(bounds);

        let p = b.position();
        prop_assert!(p.x >= 0.0 && p.x <= bounds.width, "x = {}", p.x);
        prop_assert!(p.y >= 0.0 && p.y <= bounds.height, "y = {}", p.y);
    }

    #[test]
    fn clamping_actions_keep_position_in_bounds(
        bounds in arb_bounds(),
        x in -3000.0f32..3000.0,
        y in -3000.0f32..3000.0,
        action in prop::sample::select(vec![
            Action::Stop, Action::Bounce, Action::Die,
            Action::PassThrough, Action::KillNonPlayers, Action::Hide,
        ]),
    ) {
        let mut b = Body::from_def(body(Vec2::new(x, y), Vec2::new(1.0, 1.0), action));
        b.check_bounds(bounds);

        let p = b.position();
        prop_assert!(p.x >= 0.0 && p.x <= bounds.width);
        prop_assert!(p.y >= 0.0 && p.y <= bounds.height);
    }

    #[test]
    fn stop_on_the_edge_at_rest_never_moves(
        bounds in arb_bounds(),
        t in 0.0f32..=1.0,
        edge in 0usize..4,
        ticks in 1usize..30,
    ) {
        let (w, h) = (bounds.width, bounds.height);
        let start = match edge {
            0 => Vec2::new(t * w, 0.0),
            1 => Vec2::new(t * w, h),
            2 => Vec2::new(0.0, t * h),
            _ => Vec2::new(w, t * h),
        };

        let mut world = World::new(w, h);
        let hnd = world.create_body(BodyDef {
            collision: Action::Stop,
            ..body(start, Vec2::ZERO, Action::Stop)
        });
        for _ in 0..ticks {
            world.step();
        }
        prop_assert_eq!(world.body(hnd).position(), start);
    }

    #[test]
    fn hidden_body_stays_hidden(
        velocity in arb_velocity(),
        ticks in 1usize..50,
    ) {
        let mut world = World::new(500.0, 500.0);
        let ghost = world.create_body(body(Vec2::new(250.0, 250.0), velocity, Action::Bounce));
        let other = world.create_body(body(Vec2::new(252.0, 250.0), Vec2::ZERO, Action::Stop));
        world.body_mut(ghost).hide();

        for _ in 0..ticks {
            world.step();
            prop_assert!(!world.body(ghost).is_visible());
            prop_assert!(world.contacts(other).is_empty());
        }
    }
}

// =============================================================================
// Bounce
// =============================================================================

proptest! {
    #[test]
    fn moving_pair_reflects_at_most_one_axis(
        sv in arb_velocity(),
        cv in arb_velocity(),
        dx in -9.0f32..9.0,
        dy in -9.0f32..9.0,
    ) {
        let mut sprite = Body::from_def(body(Vec2::new(100.0, 100.0), sv, Action::Stop));
        let mut collided = Body::from_def(body(Vec2::new(100.0 + dx, 100.0 + dy), cv, Action::Stop));

        let case = resolve_bounce(BodyHandle(0), &mut sprite, BodyHandle(1), &mut collided);
        let after = sprite.velocity();

        let flipped_x = after.x.signum() != sv.x.signum();
        let flipped_y = after.y.signum() != sv.y.signum();
        prop_assert!(!(flipped_x && flipped_y), "{case:?} flipped both axes");
        prop_assert_eq!(after.abs(), sv.abs());
        prop_assert_eq!(collided.velocity(), cv);
        prop_assert!(!matches!(case, BounceCase::Absorbed | BounceCase::Static));
    }

    #[test]
    fn pushing_a_resting_body_reflects_one_axis(
        sv in arb_velocity(),
        dx in -9.0f32..9.0,
        dy in -9.0f32..9.0,
    ) {
        let mut sprite = Body::from_def(body(Vec2::new(100.0, 100.0), sv, Action::Stop));
        let mut resting = Body::from_def(body(Vec2::new(100.0 + dx, 100.0 + dy), Vec2::ZERO, Action::Stop));

        let case = resolve_bounce(BodyHandle(0), &mut sprite, BodyHandle(1), &mut resting);
        let after = sprite.velocity();

        prop_assert!(matches!(case, BounceCase::Depth(_) | BounceCase::Heading(_)));
        prop_assert_eq!(after.abs(), sv.abs());
        prop_assert!((after.x != sv.x) ^ (after.y != sv.y));
    }
}
