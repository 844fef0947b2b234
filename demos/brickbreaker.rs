use ::rand::thread_rng;
use macroquad::prelude::*;
use sprite_lite_rs::collision::Aabb;
use sprite_lite_rs::dynamics::{Action, BodyDef, BodyHandle, World, WorldConfig};
use sprite_lite_rs::math::utils::random_heading;
use sprite_lite_rs::math::{Angle, Size, Vec2};
use tracing::info;

const BRICK_ROWS: usize = 5;
const BRICK_COLS: usize = 10;
const BALL_SPEED: f32 = 5.0;
const PADDLE_SPEED: f32 = 7.0;

struct Game {
    world: World,
    ball: BodyHandle,
    paddle: BodyHandle,
    bricks: Vec<BodyHandle>,
}

fn init_game(config: &WorldConfig) -> Game {
    let mut world = World::with_config(config.clone());
    let (w, h) = (config.width, config.height);

    // Scenery first so everything else draws over it.
    world.create_body(BodyDef {
        size: Size::new(w, h),
        position: Vec2::new(0.5 * w, 0.5 * h),
        is_static: true,
        backdrop: true,
        ..Default::default()
    });

    let brick = Size::new(w / BRICK_COLS as f32 - 8.0, 22.0);
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            let x = (col as f32 + 0.5) * w / BRICK_COLS as f32;
            let y = 80.0 + row as f32 * 30.0;
            bricks.push(world.create_body(BodyDef {
                size: brick,
                position: Vec2::new(x, y),
                is_static: true,
                collision: Action::Die,
                ..Default::default()
            }));
        }
    }

    let paddle = world.create_body(BodyDef {
        size: Size::new(120.0, 16.0),
        position: Vec2::new(0.5 * w, h - 60.0),
        collision: Action::Stop,
        ..Default::default()
    });
    world.set_player(Some(paddle));

    // Launch upward, somewhere between up-left and up-right.
    let heading = random_heading(&mut thread_rng(), 225.0, 315.0);
    let ball = world.create_body(BodyDef {
        size: Size::new(14.0, 14.0),
        position: Vec2::new(0.5 * w, h - 120.0),
        velocity: Vec2::from_angle(heading, BALL_SPEED),
        boundary: Action::Bounce,
        collision: Action::Bounce,
        ..Default::default()
    });

    world.create_body(BodyDef {
        size: Size::new(w, 10.0),
        position: Vec2::new(0.5 * w, h - 5.0),
        is_static: true,
        collision: Action::KillNonPlayers,
        ..Default::default()
    });

    info!(bricks = bricks.len(), bodies = world.bodies.len(), "new game");
    Game {
        world,
        ball,
        paddle,
        bricks,
    }
}

fn steer_paddle(world: &mut World, paddle: BodyHandle) {
    let movement = &mut world.body_mut(paddle).movement;
    movement.velocity = Vec2::ZERO;
    if is_key_down(KeyCode::Left) {
        movement.add_vector(Angle::from_degrees(180.0), PADDLE_SPEED);
    }
    if is_key_down(KeyCode::Right) {
        movement.add_vector(Angle::from_degrees(0.0), PADDLE_SPEED);
    }
}

fn draw_rect(r: Aabb, color: Color) {
    draw_rectangle(r.left, r.top, r.width(), r.height(), color);
}

#[macroquad::main("sprite-lite-rs brickbreaker")]
async fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let config = WorldConfig {
        title: "Brickbreaker".to_owned(),
        width: 800.0,
        height: 600.0,
        frame_rate: 60,
    };
    request_new_screen_size(config.width, config.height);

    let mut game = init_game(&config);
    let dt = 1.0 / config.frame_rate as f32;
    let mut accumulator = 0.0;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::R) {
            game = init_game(&config);
        }
        if is_key_pressed(KeyCode::K) {
            if game.world.is_paused() {
                game.world.resume();
            } else {
                game.world.pause();
            }
        }

        steer_paddle(&mut game.world, game.paddle);

        // Fixed-rate ticks, independent of the display refresh.
        accumulator += get_frame_time();
        while accumulator >= dt {
            game.world.step();
            accumulator -= dt;
        }
        if game.world.is_paused() && is_key_pressed(KeyCode::N) {
            game.world.resume();
            game.world.step();
            game.world.pause();
        }

        clear_background(BLACK);

        for (h, b) in game.world.visible_bodies() {
            let color = if b.backdrop {
                Color::new(0.1, 0.1, 0.16, 1.0)
            } else if h == game.ball {
                Color::new(0.95, 0.95, 0.6, 1.0)
            } else if Some(h) == game.world.player() {
                Color::new(0.4, 0.9, 0.4, 1.0)
            } else if b.collision == Action::KillNonPlayers {
                Color::new(0.6, 0.15, 0.15, 1.0)
            } else {
                Color::new(0.8, 0.8, 0.9, 1.0)
            };
            draw_rect(b.rect(), color);
        }

        let left = game
            .bricks
            .iter()
            .filter(|&&h| game.world.body(h).is_visible())
            .count();
        let status = if left == 0 {
            "cleared!"
        } else if !game.world.body(game.ball).is_visible() {
            "ball lost"
        } else if game.world.is_paused() {
            "paused"
        } else {
            ""
        };

        let overlay = format!(
            "{}  tick={} bricks={} {}\nKeys: Left/Right paddle | K pause | N step | R restart",
            game.world.config.title,
            game.world.tick(),
            left,
            status
        );
        draw_text(&overlay, 12.0, 20.0, 18.0, WHITE);

        next_frame().await;
    }
}
