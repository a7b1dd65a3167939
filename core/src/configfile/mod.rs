use config::{self, ConfigError};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

mod error;

pub use self::error::*;

/// Load a layered json configuration.
///
/// Layers are merged in the order: built-in `defaults`, environment variables (using `--` as the
/// key separator, ex. `MONGO--URI`) and finally the content of the file at `path`.
/// The file is required: a missing or unreadable file gives [`ConfigFileError::Read`], any
/// syntax or layout problem gives [`ConfigFileError::Parse`].
pub fn load<T>(path: &Path, defaults: &str) -> Result<T, ConfigFileError>
where
    T: DeserializeOwned,
{
    use config::{Environment, File, FileFormat};

    log::info!("Loading config file {:?}", path);
    let content = fs::read_to_string(path).map_err(|cause| ConfigFileError::Read {
        path: path.to_owned(),
        cause,
    })?;

    let parse_error = |err: ConfigError| ConfigFileError::Parse {
        path: path.to_owned(),
        cause: err.to_string(),
    };

    let mut s = config::Config::new();
    s.merge(File::from_str(defaults, FileFormat::Json)).map_err(parse_error)?;
    s.merge(Environment::new().separator("--")).map_err(parse_error)?;
    s.merge(File::from_str(&content, FileFormat::Json)).map_err(parse_error)?;

    s.try_into().map_err(parse_error)
}
