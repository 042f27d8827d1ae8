use async_nats::{Client, ConnectOptions, ServerAddr};
use std::time::Duration;
use tracing::info;

use super::NatsConfig;
use crate::MessagingError;

/// Connect to the first reachable server in `config.servers`.
pub async fn connect(config: &NatsConfig) -> Result<Client, MessagingError> {
    let addresses = parse_servers(&config.servers)?;

    let mut options =
        ConnectOptions::new().connection_timeout(Duration::from_secs(config.connect_timeout_secs));
    if let Some(ref name) = config.connection_name {
        options = options.name(name);
    }

    info!(servers = ?config.servers, "Connecting to NATS");
    let client = options.connect(addresses).await?;
    info!("Successfully connected to NATS");

    Ok(client)
}

fn parse_servers(servers: &[String]) -> Result<Vec<ServerAddr>, MessagingError> {
    servers
        .iter()
        .map(|address| {
            address
                .parse::<ServerAddr>()
                .map_err(|e| MessagingError::InvalidServerAddress {
                    address: address.clone(),
                    details: e.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_servers() {
        let parsed = parse_servers(&["nats://n1:4222".to_string(), "n2:4223".to_string()]).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_parse_servers_rejects_bad_address() {
        let err = parse_servers(&["nats://host:notaport".to_string()]).unwrap_err();
        assert!(matches!(err, MessagingError::InvalidServerAddress { .. }));
    }
}
