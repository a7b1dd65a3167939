use super::{MongoConfig, MongoError};
use mongodb::{bson::doc, options::ClientOptions, Client, Database};
use std::time::Duration;

/// An open client together with the handle of the configured database.
///
/// The client is shut down by [`MongoConnection::release`], which consumes the connection, thus it
/// can be released only once.
pub struct MongoConnection {
    client: Client,
    database: Database,
}

impl MongoConnection {
    /// Connect to the configured server and check it is reachable.
    pub async fn connect(config: &MongoConfig) -> Result<MongoConnection, MongoError> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|err| MongoError::Options(err.to_string()))?;
        if let Some(timeout) = config.server_selection_timeout {
            options.server_selection_timeout = Some(Duration::from_secs(timeout));
        }

        let client = Client::with_options(options).map_err(|err| MongoError::Options(err.to_string()))?;
        let database = client.database(&config.database);

        // the driver connects lazily, ping to find an unreachable server before any real work
        log::debug!("Pinging database {}", config.database);
        database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|err| MongoError::Connection(err.to_string()))?;

        log::info!("Connected to database {}", config.database);
        Ok(MongoConnection { client, database })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub async fn release(self) {
        log::info!("Closing connection to database {}", self.database.name());
        self.client.shutdown().await;
    }
}
