//! Command-line flag for the config path.

use std::path::PathBuf;

use clap::Args;
use serde::de::DeserializeOwned;

use super::{load_config, ConfigError, PathResolver, CONFIG_FLAG, CONFIG_HELP};

/// The `--config <path>` flag, for flattening into a host application's parser.
///
/// The host parses arguments once; this type only carries the result.
///
/// ```
/// use clap::Parser;
/// use config_path::ConfigArgs;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     config: ConfigArgs,
/// }
///
/// let cli = Cli::parse_from(["app", "--config=/tmp/a.json"]);
/// assert_eq!(cli.config.resolve_path(), std::path::Path::new("/tmp/a.json"));
/// ```
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    #[arg(long = CONFIG_FLAG, value_name = "PATH", help = CONFIG_HELP)]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Resolves the config path: flag, then `CONFIG_FILE`, then the default.
    pub fn resolve_path(&self) -> PathBuf {
        PathResolver::new().with_flag(self.config.as_deref()).resolve()
    }

    /// Resolves the config path and loads it as JSON.
    pub fn load<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        load_config(self.resolve_path())
    }
}
