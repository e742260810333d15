use common::config::{ConfigLoader, FileConfigSource, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::{ApiConfig, GameTuning};

const CONFIG_FILE_NAME: &str = "snake_arcade_config.yaml";

pub fn get_config_loader() -> ConfigLoader<FileConfigSource, ClientConfig, YamlConfigSerializer> {
    ConfigLoader::from_yaml_file(CONFIG_FILE_NAME)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub game: GameTuning,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.api.validate()?;
        self.game.validate()?;
        Ok(())
    }
}
