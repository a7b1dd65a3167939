use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum MongoError {
    /// The connection string or the client options are invalid
    Options(String),

    /// The server could not be reached
    Connection(String),
}

impl fmt::Display for MongoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MongoError::Options(ref e) => write!(f, "Invalid mongodb options: {}", e),
            MongoError::Connection(ref e) => write!(f, "Failed to connect to mongodb: {}", e),
        }
    }
}

impl Error for MongoError {}
