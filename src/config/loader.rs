//! Loading a configuration file into a caller-defined type.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::{ConfigError, Format};

/// Opens files for reading.
///
/// The returned handle is closed when it is dropped.
pub trait FileSystem {
    type File: Read;

    fn open(&self, path: &Path) -> std::io::Result<Self::File>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    type File = File;

    fn open(&self, path: &Path) -> std::io::Result<File> {
        File::open(path)
    }
}

/// Loads a JSON config file into `T`.
///
/// ## Example
///
/// ```no_run
/// use config_path::{load_config, resolve_config_path};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct MyConfig {
///     name: String,
///     port: u16,
/// }
///
/// let path = resolve_config_path(None);
/// let config: MyConfig = load_config(&path)?;
/// # Ok::<(), config_path::ConfigError>(())
/// ```
pub fn load_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    ConfigLoader::new().load(path)
}

/// Loader with a pluggable filesystem and format.
///
/// Either a fully decoded `T` is returned or an error; the file handle is
/// released before `load` returns in both cases.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader<F = OsFileSystem> {
    fs: F,
    format: Format,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: FileSystem> ConfigLoader<F> {
    /// Replaces the filesystem used to open config files.
    pub fn with_filesystem<G: FileSystem>(self, fs: G) -> ConfigLoader<G> {
        ConfigLoader {
            fs,
            format: self.format,
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn load<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T, ConfigError> {
        let path = path.as_ref();

        let file = self.fs.open(path).map_err(|e| ConfigError::FileOpen {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), format = ?self.format, "opened config file");

        // `decode` takes the handle by value, so it is dropped on every return.
        let config = self
            .format
            .decode(file)
            .map_err(|e| ConfigError::Decode {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::debug!(path = %path.display(), "decoded config file");
        Ok(config)
    }
}
