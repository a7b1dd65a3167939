use rolesync_core::{configfile::ConfigFileError, mongo::MongoError};
use rolesync_iam::IAMError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum SeedError {
    Config(ConfigFileError),
    Connection(MongoError),
    Roles(IAMError),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SeedError::Config(err) => write!(f, "Configuration failed: {}", err),
            SeedError::Connection(err) => write!(f, "Database connection failed: {}", err),
            SeedError::Roles(err) => write!(f, "Role synchronization failed: {}", err),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SeedError::Config(err) => Some(err),
            SeedError::Connection(err) => Some(err),
            SeedError::Roles(err) => Some(err),
        }
    }
}

impl From<ConfigFileError> for SeedError {
    fn from(err: ConfigFileError) -> Self {
        SeedError::Config(err)
    }
}

impl From<MongoError> for SeedError {
    fn from(err: MongoError) -> Self {
        SeedError::Connection(err)
    }
}

impl From<IAMError> for SeedError {
    fn from(err: IAMError) -> Self {
        SeedError::Roles(err)
    }
}
