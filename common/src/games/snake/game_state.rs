use std::time::Duration;

use crate::games::SessionRng;
use super::food::place_food;
use super::settings::{INITIAL_DIRECTION, PULSE_STEP, SnakeSettings};
use super::snake::Snake;
use super::types::{DeathReason, Direction, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Ate { speed_changed: bool },
    Died(DeathReason),
}

/// State of one run, rebuilt from scratch on every start.
#[derive(Clone, Debug)]
pub struct GameSession {
    snake: Snake,
    direction: Direction,
    pending_direction: Direction,
    food: Option<Point>,
    score: u32,
    interval: Duration,
    ticks: u64,
    pulse_phase: f32,
}

impl GameSession {
    pub fn new(settings: &SnakeSettings, rng: &mut SessionRng) -> Self {
        Self::with_snake(Snake::spawn(), INITIAL_DIRECTION, settings, rng)
    }

    pub fn with_snake(
        snake: Snake,
        direction: Direction,
        settings: &SnakeSettings,
        rng: &mut SessionRng,
    ) -> Self {
        let food = place_food(&snake, rng);
        Self {
            snake,
            direction,
            pending_direction: direction,
            food,
            score: 0,
            interval: settings.initial_interval,
            ticks: 0,
            pulse_phase: 0.0,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pulse_phase(&self) -> f32 {
        self.pulse_phase
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Option<Point>) {
        self.food = food;
    }

    #[cfg(test)]
    pub(crate) fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Queues `direction` for the next step. A reversal of the direction
    /// currently applied is discarded and leaves the queue untouched.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    pub fn step(&mut self, settings: &SnakeSettings, rng: &mut SessionRng) -> StepOutcome {
        self.ticks += 1;
        self.pulse_phase += PULSE_STEP;

        if !self.pending_direction.is_opposite(&self.direction) {
            self.direction = self.pending_direction;
        }

        let new_head = self.snake.head().offset(self.direction);

        if !new_head.in_bounds() {
            return StepOutcome::Died(DeathReason::WallCollision);
        }
        // Checked against the whole pre-step body, tail included: stepping
        // into the cell the tail is about to leave is still a collision.
        if self.snake.contains(&new_head) {
            return StepOutcome::Died(DeathReason::SelfCollision);
        }

        self.snake.push_head(new_head);

        if self.food != Some(new_head) {
            self.snake.pop_tail();
            return StepOutcome::Moved;
        }

        self.score += 1;
        self.food = place_food(&self.snake, rng);
        if self.food.is_none() {
            return StepOutcome::Died(DeathReason::BoardFull);
        }

        StepOutcome::Ate {
            speed_changed: self.speed_up(settings),
        }
    }

    fn speed_up(&mut self, settings: &SnakeSettings) -> bool {
        if self.interval <= settings.min_interval {
            return false;
        }
        self.interval = self
            .interval
            .saturating_sub(settings.interval_step)
            .max(settings.min_interval);
        true
    }
}
