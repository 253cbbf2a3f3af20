//! Layered configuration loading
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults for the active environment
//! 2. Optional `config/<environment>.{toml,yaml,json}` file
//! 3. `DJ__`-prefixed environment variables, `__` separating nested keys
//!    (e.g. `DJ__AUTH__CUSTOMER__SECRET`)
//!
//! A `.env` file in the working directory is read into the process
//! environment first.

use ::config::{Config, Environment as EnvSource, File};
use dj_shared::{AppConfig, Environment};

use crate::InfrastructureError;

const ENV_PREFIX: &str = "DJ";
const ENV_SEPARATOR: &str = "__";

/// Load and validate the application configuration
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    dotenvy::dotenv().ok();
    let environment = Environment::from_env();
    load_config_for(environment, Some(EnvSource::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR)))
}

fn load_config_for(
    environment: Environment,
    env_source: Option<EnvSource>,
) -> Result<AppConfig, InfrastructureError> {
    let defaults = AppConfig::for_environment(environment);

    let mut builder = Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(File::with_name(environment.config_file()).required(false));
    if let Some(source) = env_source {
        builder = builder.add_source(source.try_parsing(true));
    }

    let config: AppConfig = builder.build()?.try_deserialize()?;
    config.validate().map_err(InfrastructureError::Config)?;

    tracing::info!(
        environment = %config.environment,
        port = config.server.port,
        delivery = ?config.verification.delivery,
        "Configuration loaded"
    );
    Ok(config)
}
