#[cfg(feature = "config")]
use core_config::{env_list_or_default, env_parse_or_default, ConfigError, FromEnv};

/// Connection settings for a NATS cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NatsConfig {
    /// Seed servers, e.g. `nats://localhost:4222`
    pub servers: Vec<String>,

    /// Client name shown in the server's connection list
    pub connection_name: Option<String>,

    pub connect_timeout_secs: u64,
}

impl NatsConfig {
    pub fn new<I, S>(servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            servers: servers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_connection_name(mut self, name: impl Into<String>) -> Self {
        self.connection_name = Some(name.into());
        self
    }
}

impl Default for NatsConfig {
    fn default() -> Self {
        Self {
            servers: vec!["nats://localhost:4222".to_string()],
            connection_name: None,
            connect_timeout_secs: 5,
        }
    }
}

/// Environment variables:
/// - `NATS_URL` - comma-separated server list (default `nats://localhost:4222`)
/// - `NATS_CONNECTION_NAME` (optional)
/// - `NATS_CONNECT_TIMEOUT_SECS` (default 5)
#[cfg(feature = "config")]
impl FromEnv for NatsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let servers = env_list_or_default("NATS_URL", "nats://localhost:4222");
        if servers.is_empty() {
            return Err(ConfigError::ParseError {
                key: "NATS_URL".to_string(),
                details: "at least one server is required".to_string(),
            });
        }

        Ok(Self {
            servers,
            connection_name: std::env::var("NATS_CONNECTION_NAME").ok(),
            connect_timeout_secs: env_parse_or_default("NATS_CONNECT_TIMEOUT_SECS", 5)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nats_config_new() {
        let config = NatsConfig::new(["nats://a:4222", "nats://b:4222"]).with_connection_name("api");
        assert_eq!(config.servers, vec!["nats://a:4222", "nats://b:4222"]);
        assert_eq!(config.connection_name.as_deref(), Some("api"));
        assert_eq!(config.connect_timeout_secs, 5);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_nats_config_from_env_server_list() {
        temp_env::with_vars(
            [
                ("NATS_URL", Some("nats://n1:4222, nats://n2:4222")),
                ("NATS_CONNECTION_NAME", None::<&str>),
                ("NATS_CONNECT_TIMEOUT_SECS", None::<&str>),
            ],
            || {
                let config = NatsConfig::from_env().unwrap();
                assert_eq!(config.servers, vec!["nats://n1:4222", "nats://n2:4222"]);
                assert_eq!(config.connection_name, None);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_nats_config_from_env_rejects_empty_list() {
        temp_env::with_var("NATS_URL", Some(" , "), || {
            let err = NatsConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("NATS_URL"));
        });
    }
}
