use approx::assert_relative_eq;

use sprite_lite_rs::dynamics::{Action, BodyDef, World};
use sprite_lite_rs::math::{Size, Vec2};

const W: f32 = 400.0;
const H: f32 = 300.0;

fn square(side: f32, x: f32, y: f32, vx: f32, vy: f32) -> BodyDef {
    BodyDef {
        size: Size::new(side, side),
        position: Vec2::new(x, y),
        velocity: Vec2::new(vx, vy),
        ..Default::default()
    }
}

#[test]
fn head_on_bouncers_both_reverse() {
    let mut world = World::new(W, H);

    // 10-wide boxes, edges 2 apart.
    let a = world.create_body(BodyDef {
        boundary: Action::Stop,
        collision: Action::Bounce,
        ..square(10.0, 100.0, 150.0, 3.0, 0.0)
    });
    let b = world.create_body(BodyDef {
        boundary: Action::Stop,
        collision: Action::Bounce,
        ..square(10.0, 112.0, 150.0, -3.0, 0.0)
    });

    world.step();
    assert!(world.body(a).aabb().overlaps(&world.body(b).aabb()));

    world.step();
    assert_relative_eq!(world.body(a).velocity().x, -3.0, epsilon = 1e-4);
    assert_relative_eq!(world.body(b).velocity().x, 3.0, epsilon = 1e-4);

    // They separate and keep going.
    for _ in 0..5 {
        world.step();
    }
    assert!(!world.body(a).aabb().overlaps(&world.body(b).aabb()));
    assert!(world.body(a).velocity().x < 0.0);
    assert!(world.body(b).velocity().x > 0.0);
    assert!(world.body(a).stationary_collisions().is_empty());
    assert!(world.body(b).stationary_collisions().is_empty());
}

#[test]
fn dynamic_bouncer_reflects_off_static_body() {
    for static_first in [false, true] {
        let mut world = World::new(W, H);
        let wall = BodyDef {
            is_static: true,
            collision: Action::Stop,
            ..square(10.0, 112.0, 150.0, 0.0, 0.0)
        };
        let ball = BodyDef {
            collision: Action::Bounce,
            ..square(10.0, 100.0, 150.0, 3.0, 0.0)
        };

        let (wall, ball) = if static_first {
            let w = world.create_body(wall);
            (w, world.create_body(ball))
        } else {
            let b = world.create_body(ball);
            (world.create_body(wall), b)
        };

        world.step();
        world.step();

        let v = world.body(ball).velocity();
        assert_relative_eq!(v.x, -3.0, epsilon = 1e-4);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-5);
        assert_eq!(world.body(wall).position(), Vec2::new(112.0, 150.0));
    }
}

#[test]
fn falling_off_the_world_kills_the_body() {
    let mut world = World::new(W, H);
    let h = world.create_body(BodyDef {
        boundary: Action::Die,
        ..square(10.0, 200.0, H - 1.0, 0.0, 5.0)
    });

    world.step();
    assert!(world.body(h).is_visible());
    assert!(world.body(h).position().y > H);

    world.step();
    assert!(!world.body(h).is_visible());

    let parked = world.body(h).position();
    for _ in 0..20 {
        world.step();
    }
    assert!(!world.body(h).is_visible());
    assert_eq!(world.body(h).position(), parked);

    world.body_mut(h).show();
    assert!(world.body(h).is_visible());
    assert_relative_eq!(parked.y, H);
}

#[test]
fn kill_floor_spares_the_player() {
    let mut world = World::new(W, H);
    let floor = world.create_body(BodyDef {
        size: Size::new(W, 10.0),
        is_static: true,
        collision: Action::KillNonPlayers,
        ..square(0.0, W / 2.0, H - 5.0, 0.0, 0.0)
    });
    let npc = world.create_body(BodyDef {
        collision: Action::Bounce,
        ..square(10.0, 100.0, H - 15.0, 0.0, 2.0)
    });
    let player = world.create_body(BodyDef {
        collision: Action::Stop,
        ..square(10.0, 300.0, H - 15.0, 0.0, 2.0)
    });
    world.set_player(Some(player));

    world.step();
    world.step();

    assert!(!world.body(npc).is_visible());
    assert!(world.body(floor).is_visible());
    assert!(world.body(player).is_visible());
    assert_relative_eq!(world.body(player).velocity().y, 2.0, epsilon = 1e-5);

    for _ in 0..10 {
        world.step();
    }
    assert!(world.body(player).is_visible());
    assert!(world.body(floor).is_visible());
}

#[test]
fn pass_through_body_changes_nothing() {
    let mut world = World::new(W, H);
    let ghost = world.create_body(BodyDef {
        collision: Action::PassThrough,
        ..square(100.0, 200.0, 150.0, 0.0, 0.0)
    });
    let bouncer = world.create_body(BodyDef {
        collision: Action::Bounce,
        ..square(10.0, 200.0, 120.0, 1.0, 0.0)
    });
    let mortal = world.create_body(BodyDef {
        is_static: true,
        collision: Action::Die,
        ..square(10.0, 160.0, 150.0, 0.0, 0.0)
    });
    let killer = world.create_body(BodyDef {
        is_static: true,
        collision: Action::KillNonPlayers,
        ..square(10.0, 240.0, 150.0, 0.0, 0.0)
    });

    for _ in 0..5 {
        world.step();
    }

    for h in [ghost, bouncer, mortal, killer] {
        assert!(world.body(h).is_visible(), "{h:?} was hidden");
    }
    assert_eq!(world.body(ghost).velocity(), Vec2::ZERO);
    assert_eq!(world.body(ghost).position(), Vec2::new(200.0, 150.0));
    assert_relative_eq!(world.body(bouncer).velocity().x, 1.0, epsilon = 1e-5);
    assert_relative_eq!(world.body(bouncer).velocity().y, 0.0, epsilon = 1e-5);
    assert!(world.body(bouncer).stationary_collisions().is_empty());
}
