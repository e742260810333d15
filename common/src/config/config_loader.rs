use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::log_warn;
use super::{ConfigSerializer, ConfigSource, FileConfigSource, Validate, YamlConfigSerializer};

/// Reads, validates and caches a config value. The first successful load is
/// kept for the lifetime of the loader.
pub struct ConfigLoader<TSource, TConfig, TSerializer = YamlConfigSerializer>
where
    TSource: ConfigSource,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    source: TSource,
    serializer: TSerializer,
    cached: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigLoader<FileConfigSource, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: &str) -> Self {
        Self::new(FileConfigSource::new(path), YamlConfigSerializer::new())
    }
}

impl<TSource, TConfig, TSerializer> ConfigLoader<TSource, TConfig, TSerializer>
where
    TSource: ConfigSource,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(source: TSource, serializer: TSerializer) -> Self {
        Self {
            source,
            serializer,
            cached: Arc::new(Mutex::new(None)),
        }
    }

    /// Missing source yields `TConfig::default()`; unreadable, unparsable or
    /// invalid content is an error.
    pub fn load(&self) -> Result<TConfig, String> {
        let mut cached = self.cached.lock().unwrap();

        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.source.read()? else {
            return Ok(TConfig::default());
        };

        let config = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn load_or_default(&self) -> TConfig {
        self.load().unwrap_or_else(|err| {
            log_warn!("Using default config, {} is unusable: {}", self.source.describe(), err);
            TConfig::default()
        })
    }
}
