//! Level layout
//!
//! Builds the standard arena and a seeded brick grid. Same seed, same board.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Entity, EntityStore, INDESTRUCTIBLE};
use crate::Tuning;
use crate::consts::*;

/// Lowest a brick row may sit, as a fraction of the arena height
const BRICK_FLOOR_FRACTION: f32 = 0.45;

/// Generate a level from a seed
pub fn generate(seed: u64, tuning: &Tuning) -> EntityStore {
    let mut rng = Pcg32::seed_from_u64(seed);

    let wall_size = Vec2::new(WALL_THICKNESS, ARENA_HEIGHT);
    let wall_offset = ARENA_HALF_WIDTH + WALL_THICKNESS / 2.0;
    let mut store = EntityStore {
        ball: Entity::new(Vec2::ZERO, Vec2::splat(BALL_SIZE), 1),
        paddle: Entity::new(
            Vec2::new(0.0, PADDLE_Y),
            Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            INDESTRUCTIBLE,
        ),
        left_wall: Entity::new(
            Vec2::new(-wall_offset, ARENA_HEIGHT / 2.0),
            wall_size,
            INDESTRUCTIBLE,
        ),
        right_wall: Entity::new(
            Vec2::new(wall_offset, ARENA_HEIGHT / 2.0),
            wall_size,
            INDESTRUCTIBLE,
        ),
        bricks: Vec::new(),
    };
    rest_ball_on_paddle(&mut store);

    // Fit the grid between the walls and above the floor line
    let pitch = Vec2::new(BRICK_WIDTH + BRICK_SPACING, BRICK_HEIGHT + BRICK_SPACING);
    let max_cols = ((2.0 * ARENA_HALF_WIDTH + BRICK_SPACING) / pitch.x).floor() as u32;
    let floor = ARENA_HEIGHT * BRICK_FLOOR_FRACTION;
    let max_rows = ((BRICK_TOP_Y - floor) / pitch.y).floor() as u32 + 1;
    let cols = tuning.brick_cols.min(max_cols);
    let rows = tuning.brick_rows.min(max_rows);
    if cols < tuning.brick_cols || rows < tuning.brick_rows {
        log::warn!(
            "Brick grid {}x{} does not fit, using {}x{}",
            tuning.brick_rows,
            tuning.brick_cols,
            rows,
            cols
        );
    }

    let grid_width = cols as f32 * pitch.x - BRICK_SPACING;
    let first_x = -grid_width / 2.0 + BRICK_WIDTH / 2.0;

    for row in 0..rows {
        let y = BRICK_TOP_Y - row as f32 * pitch.y;
        for col in 0..cols {
            let x = first_x + col as f32 * pitch.x;
            let health = roll_health(&mut rng, tuning);
            store.bricks.push(Entity::new(
                Vec2::new(x, y),
                Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
                health,
            ));
        }
    }

    log::info!(
        "Level {}: {}x{} bricks, {} to clear",
        seed,
        rows,
        cols,
        store.bricks_remaining()
    );

    store
}

/// Put the ball on top of the paddle, clear of its top edge
pub fn rest_ball_on_paddle(store: &mut EntityStore) {
    let y = store.paddle.top() + store.ball.half_size().y + BALL_REST_GAP;
    store.ball.position = Vec2::new(store.paddle.position.x, y);
}

/// Pick a brick's starting health
fn roll_health(rng: &mut Pcg32, tuning: &Tuning) -> u8 {
    let roll = rng.random_range(0..100u32);
    if roll < tuning.indestructible_chance {
        INDESTRUCTIBLE
    } else if roll < tuning.indestructible_chance + tuning.armored_chance {
        rng.random_range(2..=3)
    } else {
        1
    }
}
