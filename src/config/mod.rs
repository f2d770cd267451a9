//! Configuration path resolution and loading.

mod cli;
mod error;
mod format;
mod loader;
mod path;

pub use cli::ConfigArgs;
pub use error::{ConfigError, DecodeError};
pub use format::Format;
pub use loader::{load_config, ConfigLoader, FileSystem, OsFileSystem};
pub use path::{
    resolve_config_path, ConfigSourceKind, PathResolver, CONFIG_FLAG, CONFIG_HELP,
    DEFAULT_FILE, ENV_VAR,
};
