//! Configuration file path resolution.
//!
//! A path is picked from three sources, first non-empty wins:
//! the `--config` flag, the `CONFIG_FILE` environment variable, then
//! [`DEFAULT_FILE`]. Resolution is string precedence only and never
//! touches the filesystem.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Long name of the command-line flag carrying the config path.
pub const CONFIG_FLAG: &str = "config";

/// Help text for [`CONFIG_FLAG`].
pub const CONFIG_HELP: &str = "Path to configuration file";

/// Environment variable consulted when the flag is absent.
pub const ENV_VAR: &str = "CONFIG_FILE";

/// Path used when neither the flag nor the environment variable is set.
pub const DEFAULT_FILE: &str = "./config/config.json";

/// Where a resolved config path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSourceKind {
    Flag,
    Env,
    Default,
}

impl fmt::Display for ConfigSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Flag => "flag",
            Self::Env => "env",
            Self::Default => "default",
        };
        f.write_str(name)
    }
}

/// Resolves the config path from an already-parsed flag value and the
/// process environment.
///
/// ```
/// use config_path::resolve_config_path;
/// use std::path::Path;
///
/// let path = resolve_config_path(Some(Path::new("/etc/app.json")));
/// assert_eq!(path, Path::new("/etc/app.json"));
/// ```
pub fn resolve_config_path(flag: Option<&Path>) -> PathBuf {
    PathResolver::new().with_flag(flag).resolve()
}

/// Builder for resolving a config path with non-default names.
///
/// The flag value is passed in by the caller; this type never parses
/// command-line arguments itself.
#[derive(Debug, Clone)]
#[must_use = "resolvers do nothing until .resolve() is called"]
pub struct PathResolver {
    flag: Option<PathBuf>,
    env_var: String,
    default: PathBuf,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self {
            flag: None,
            env_var: ENV_VAR.to_string(),
            default: PathBuf::from(DEFAULT_FILE),
        }
    }
}

impl PathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of the command-line flag, if one was given.
    ///
    /// An empty value counts as absent.
    pub fn with_flag<P: Into<PathBuf>>(mut self, flag: Option<P>) -> Self {
        self.flag = flag.map(Into::into);
        self
    }

    /// Overrides the environment variable name (default [`ENV_VAR`]).
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    /// Overrides the fallback path (default [`DEFAULT_FILE`]).
    pub fn with_default(mut self, path: impl Into<PathBuf>) -> Self {
        self.default = path.into();
        self
    }

    /// Resolves against the process environment.
    pub fn resolve(self) -> PathBuf {
        self.resolve_source().0
    }

    /// Resolves against the process environment, also reporting the source.
    pub fn resolve_source(self) -> (PathBuf, ConfigSourceKind) {
        self.resolve_source_with(|name| std::env::var_os(name))
    }

    /// Resolves using `lookup` in place of the process environment.
    pub fn resolve_with<L>(self, lookup: L) -> PathBuf
    where
        L: Fn(&str) -> Option<OsString>,
    {
        self.resolve_source_with(lookup).0
    }

    /// Resolves using `lookup` in place of the process environment, also
    /// reporting the source.
    pub fn resolve_source_with<L>(self, lookup: L) -> (PathBuf, ConfigSourceKind)
    where
        L: Fn(&str) -> Option<OsString>,
    {
        let (path, source) = match self.flag.filter(|p| !p.as_os_str().is_empty()) {
            Some(flag) => (flag, ConfigSourceKind::Flag),
            None => match lookup(&self.env_var).filter(|v| !v.is_empty()) {
                Some(value) => (PathBuf::from(value), ConfigSourceKind::Env),
                None => (self.default, ConfigSourceKind::Default),
            },
        };

        tracing::debug!(path = %path.display(), %source, "resolved config path");
        (path, source)
    }
}
