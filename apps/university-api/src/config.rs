use core_config::{AppInfo, FromEnv, app_info, env_or_default, env_parse_or_default, server::ServerConfig};
use database::mongodb::MongoConfig;
use messaging::nats::NatsConfig;
use std::time::Duration;

pub use core_config::Environment;

pub const DEFAULT_EVENTS_SUBJECT: &str = "universities.events";

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
    pub nats: NatsConfig,
    /// Subject every university event is published on
    pub events_subject: String,
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let mongodb = MongoConfig::from_env()?;
        let nats = NatsConfig::from_env()?;
        let events_subject = env_or_default("UNIVERSITY_EVENTS_SUBJECT", DEFAULT_EVENTS_SUBJECT);
        let shutdown_timeout = Duration::from_secs(env_parse_or_default("SHUTDOWN_TIMEOUT_SECS", 30)?);

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            mongodb,
            nats,
            events_subject,
            shutdown_timeout,
        })
    }
}
