mod config;
mod error;
mod roles;

use self::config::Config;
use self::error::SeedError;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module("rolesync_seed", log::LevelFilter::Debug)
        .filter_module("rolesync_iam", log::LevelFilter::Debug)
        .filter_module("rolesync_core", log::LevelFilter::Debug)
        .init();

    if let Err(err) = run().await {
        log::error!("{}", err);
        return Err(err.into());
    }
    Ok(())
}

async fn run() -> Result<(), SeedError> {
    let config = Config::new()?;
    log::info!("{:#?}", config);

    let report = roles::populate_roles(&config, &roles::role_definitions()).await?;
    log::info!("{} role(s) synchronized", report.outcomes.len());
    Ok(())
}
