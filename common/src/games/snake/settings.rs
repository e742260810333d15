use std::time::Duration;

use super::types::{Direction, Point};

pub const GRID_SIZE: i32 = 20;
pub const CANVAS_SIZE: f32 = 500.0;
pub const CELL_SIZE: f32 = CANVAS_SIZE / GRID_SIZE as f32;

pub const INITIAL_BODY: [Point; 3] = [Point::new(5, 10), Point::new(4, 10), Point::new(3, 10)];
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Phase added to the food pulse on every tick.
pub const PULSE_STEP: f32 = 0.15;

/// Speed curve of a run: the tick interval starts at `initial_interval` and
/// shrinks by `interval_step` per food eaten, never going below `min_interval`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnakeSettings {
    pub initial_interval: Duration,
    pub interval_step: Duration,
    pub min_interval: Duration,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_millis(150),
            interval_step: Duration::from_millis(2),
            min_interval: Duration::from_millis(60),
        }
    }
}
