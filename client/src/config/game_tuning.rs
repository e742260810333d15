use std::time::Duration;

use common::config::Validate;
use common::games::snake::SnakeSettings;
use serde::{Deserialize, Serialize};

const MIN_INTERVAL_FLOOR_MS: u32 = 10;
const MAX_INITIAL_INTERVAL_MS: u32 = 1000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameTuning {
    pub initial_interval_ms: u32,
    pub interval_step_ms: u32,
    pub min_interval_ms: u32,
}

impl Validate for GameTuning {
    fn validate(&self) -> Result<(), String> {
        if self.min_interval_ms < MIN_INTERVAL_FLOOR_MS {
            return Err(format!("min_interval_ms must be at least {}", MIN_INTERVAL_FLOOR_MS));
        }
        if self.min_interval_ms > self.initial_interval_ms {
            return Err("min_interval_ms must not exceed initial_interval_ms".to_string());
        }
        if self.interval_step_ms == 0 {
            return Err("interval_step_ms must be greater than 0".to_string());
        }
        if self.initial_interval_ms > MAX_INITIAL_INTERVAL_MS {
            return Err(format!("initial_interval_ms must be at most {}", MAX_INITIAL_INTERVAL_MS));
        }
        Ok(())
    }
}

impl Default for GameTuning {
    fn default() -> Self {
        let settings = SnakeSettings::default();
        Self {
            initial_interval_ms: settings.initial_interval.as_millis() as u32,
            interval_step_ms: settings.interval_step.as_millis() as u32,
            min_interval_ms: settings.min_interval.as_millis() as u32,
        }
    }
}

impl From<&GameTuning> for SnakeSettings {
    fn from(tuning: &GameTuning) -> Self {
        Self {
            initial_interval: Duration::from_millis(tuning.initial_interval_ms as u64),
            interval_step: Duration::from_millis(tuning.interval_step_ms as u64),
            min_interval: Duration::from_millis(tuning.min_interval_ms as u64),
        }
    }
}
