mod api_config;
mod client_config;
mod game_tuning;

pub use api_config::ApiConfig;
pub use client_config::{ClientConfig, get_config_loader};
pub use game_tuning::GameTuning;
