//! Resolve a configuration file path from a command-line flag, the
//! `CONFIG_FILE` environment variable, or a default, and decode the file
//! into a caller-defined type.

pub mod config;

pub use config::{
    load_config, resolve_config_path, ConfigArgs, ConfigError, ConfigLoader, DecodeError, Format,
    PathResolver,
};
