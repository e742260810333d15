use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Where raw config text comes from. `Ok(None)` means "nothing configured".
pub trait ConfigSource {
    fn read(&self) -> Result<Option<String>, String>;
    fn describe(&self) -> String;
}

pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfigSource {
    fn read(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.path.display(),
                err
            )),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
