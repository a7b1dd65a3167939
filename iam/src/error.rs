use mongodb::error::Error as MongoDbError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum IAMError {
    /// Database related error
    DB(String),
    /// The same role name is defined more than once
    DuplicateRole(String),
    /// Writing a role failed
    Upsert { role: String, cause: String },
}

impl fmt::Display for IAMError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            IAMError::DB(ref e) => write!(f, "DB, {}", e),
            IAMError::DuplicateRole(ref role) => write!(f, "Role {} is defined more than once", role),
            IAMError::Upsert { ref role, ref cause } => write!(f, "Failed to upsert role {}: {}", role, cause),
        }
    }
}

impl Error for IAMError {}

impl From<MongoDbError> for IAMError {
    fn from(err: MongoDbError) -> IAMError {
        IAMError::DB(format!("{:?}", err))
    }
}
