use rolesync_core::{
    configfile::{self, ConfigFileError},
    mongo::MongoConfig,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Config file used when none is given on the command line
pub const DEFAULT_CONFIG_FILE: &str = "../be/resources/config.json";

const DEFAULTS: &str = r#"
    {
        "mongo": {
            "server_selection_timeout": 10
        }
    }
    "#;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub mongo: MongoConfig,
}

impl Config {
    pub fn new() -> Result<Self, ConfigFileError> {
        let config_file = env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_owned());
        Config::from_file(config_file)
    }

    pub fn from_file<P: AsRef<Path>>(config_file: P) -> Result<Self, ConfigFileError> {
        configfile::load(config_file.as_ref(), DEFAULTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_temp(file_name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("rolesync-seed-{}-{}", std::process::id(), file_name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn backend_config_is_accepted() {
        let path = write_temp(
            "backend.json",
            r#"{
                "app_name": "backend",
                "mongo": { "uri": "mongodb://localhost:27017", "database": "awards" }
            }"#,
        );

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.mongo.uri, "mongodb://localhost:27017");
        assert_eq!(config.mongo.database, "awards");
        assert_eq!(config.mongo.server_selection_timeout, Some(10));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn timeout_can_be_overridden() {
        let path = write_temp(
            "timeout.json",
            r#"{ "mongo": { "uri": "mongodb://localhost", "database": "awards", "server_selection_timeout": 2 } }"#,
        );

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.mongo.server_selection_timeout, Some(2));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_database_is_rejected() {
        let path = write_temp("no_database.json", r#"{ "mongo": { "uri": "mongodb://localhost" } }"#);

        match Config::from_file(&path) {
            Err(ConfigFileError::Parse { .. }) => {}
            r => panic!("unexpected result: {:?}", r),
        }

        fs::remove_file(path).unwrap();
    }
}
