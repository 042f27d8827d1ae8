use async_nats::{connection::State, Client};

/// `true` while the client holds a live connection to a server.
pub fn is_connected(client: &Client) -> bool {
    matches!(client.connection_state(), State::Connected)
}
