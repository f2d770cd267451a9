use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::DecodeError;

/// Text format of a configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Json,
    Toml,
}

impl Format {
    /// Picks a format from the file extension.
    ///
    /// `.toml` selects [`Format::Toml`]; anything else, including no
    /// extension, selects [`Format::Json`].
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    /// Decodes one document from `reader` into `T`.
    ///
    /// Fields present in the document but absent from `T` are ignored.
    pub(crate) fn decode<T, R>(self, mut reader: R) -> Result<T, DecodeError>
    where
        T: DeserializeOwned,
        R: Read,
    {
        match self {
            Self::Json => {
                let reader = std::io::BufReader::new(reader);
                Ok(serde_json::from_reader(reader)?)
            }
            Self::Toml => {
                let mut contents = String::new();
                reader.read_to_string(&mut contents)?;
                Ok(toml::from_str(&contents)?)
            }
        }
    }
}
