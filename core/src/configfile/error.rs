use std::error::Error;
use std::path::PathBuf;
use std::{fmt, io};

#[derive(Debug)]
pub enum ConfigFileError {
    /// The file is missing or could not be read
    Read { path: PathBuf, cause: io::Error },

    /// The content is not valid json or does not match the expected layout
    Parse { path: PathBuf, cause: String },
}

impl fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConfigFileError::Read { ref path, ref cause } => {
                write!(f, "Failed to read config file {:?}: {}", path, cause)
            }
            ConfigFileError::Parse { ref path, ref cause } => {
                write!(f, "Failed to parse config file {:?}: {}", path, cause)
            }
        }
    }
}

impl Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ConfigFileError::Read { ref cause, .. } => Some(cause),
            ConfigFileError::Parse { .. } => None,
        }
    }
}
