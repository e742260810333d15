use serde::{Deserialize, Serialize};

/// Text format of a config file.
pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }

    fn describe_error(error: &serde_yaml_ng::Error) -> String {
        match error.location() {
            Some(location) => format!(
                "Failed to parse config at line {}, column {}: {}",
                location.line(),
                location.column(),
                error
            ),
            None => format!("Failed to parse config: {}", error),
        }
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to write config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| Self::describe_error(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        retries: u32,
    }

    #[test]
    fn test_parse_error_points_at_location() {
        let content = "name: demo\nretries: many\n";
        let result: Result<Sample, String> = YamlConfigSerializer::new().deserialize(content);
        let message = result.unwrap_err();
        assert!(message.contains("line 2"), "{}", message);
    }

    #[test]
    fn test_written_config_reads_back() {
        let sample = Sample { name: "demo".into(), retries: 3 };
        let serializer = YamlConfigSerializer::new();
        let text = serializer.serialize(&sample).unwrap();
        let back: Sample = serializer.deserialize(&text).unwrap();
        assert_eq!(back, sample);
    }
}
