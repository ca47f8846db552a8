//! NNTP client implementation with TLS support

mod articles;
mod auth;
mod connection;
mod group_ops;
mod io;
mod state;
mod stream;

use crate::config::ServerConfig;
use state::ConnectionState;
use std::sync::Arc;
use stream::NntpStream;

/// Async NNTP session client
///
/// The client owns its connection exclusively. All commands take
/// `&mut self`, so only one command can be in flight at a time; issuing a
/// second command before the first's data block is drained would corrupt
/// the stream framing, and the borrow checker makes that unrepresentable
/// without an external lock.
///
/// # Example
///
/// ```no_run
/// use nntp_session::{NntpClient, ServerConfig};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ServerConfig::tls("news.example.com", "user", "pass");
/// let mut client = NntpClient::connect(Arc::new(config)).await?;
/// client.authenticate().await?;
///
/// let info = client.select_group("alt.test").await?;
/// println!("Group has {} articles", info.count);
///
/// client.quit().await?;
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct NntpClient {
    /// Line transport (plain TCP or TLS)
    stream: NntpStream,
    /// Authentication progress
    state: ConnectionState,
    /// Server configuration
    config: Arc<ServerConfig>,
}

impl NntpClient {
    /// Check if the client is currently authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, ConnectionState::Authenticated)
    }

    /// Whether the connection is TLS-encrypted
    pub fn is_tls(&self) -> bool {
        matches!(self.stream, NntpStream::Tls(_))
    }
}
