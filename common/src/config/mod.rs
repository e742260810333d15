mod config_loader;
mod config_serializer;
mod config_source;
mod validate;

pub use config_loader::ConfigLoader;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use config_source::{ConfigSource, FileConfigSource};
pub use validate::Validate;
