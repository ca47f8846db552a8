//! NNTP server configuration

use std::time::Duration;

/// Default deadline for a single status line
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Default deadline for draining a whole multi-line data block
const DEFAULT_BLOCK_TIMEOUT: Duration = Duration::from_secs(180);

/// Default deadline for TCP connect plus TLS handshake
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// NNTP server configuration
///
/// Contains all the information needed to connect to an NNTP server.
///
/// # Example
///
/// ```
/// use nntp_session::ServerConfig;
///
/// // Recommended: use the constructor methods
/// let config = ServerConfig::tls("news.example.com", "user", "pass");
///
/// // Or adjust fields after construction
/// let mut config = ServerConfig::plain("news.example.com", "user", "pass");
/// config.read_timeout = std::time::Duration::from_secs(10);
/// ```
#[must_use]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerConfig {
    /// Server hostname (e.g., "news.example.com")
    pub host: String,

    /// Server port (typically 119 for plain, 563 for TLS)
    pub port: u16,

    /// Use TLS encryption
    #[cfg_attr(feature = "serde", serde(default = "default_tls"))]
    pub tls: bool,

    /// Allow insecure TLS connections (self-signed certificates, expired
    /// certificates, hostname mismatches)
    ///
    /// **Security Warning:** Setting this to `true` disables certificate
    /// validation, making your connection vulnerable to man-in-the-middle
    /// attacks. Only use this for testing or with servers you trust on a
    /// secure network.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow_insecure_tls: bool,

    /// Username for authentication
    pub username: String,

    /// Password for authentication
    pub password: String,

    /// Deadline for reading a single status line
    ///
    /// The session performs no reads without a deadline; a server that goes
    /// silent trips [`NntpError::Timeout`](crate::NntpError::Timeout)
    /// instead of blocking forever.
    #[cfg_attr(feature = "serde", serde(default = "default_read_timeout"))]
    pub read_timeout: Duration,

    /// Deadline for draining an entire multi-line data block
    /// (LIST, HEAD, BODY)
    #[cfg_attr(feature = "serde", serde(default = "default_block_timeout"))]
    pub block_timeout: Duration,

    /// Deadline for TCP connect plus TLS handshake
    #[cfg_attr(feature = "serde", serde(default = "default_connect_timeout"))]
    pub connect_timeout: Duration,
}

#[cfg(feature = "serde")]
fn default_tls() -> bool {
    true
}

#[cfg(feature = "serde")]
fn default_read_timeout() -> Duration {
    DEFAULT_READ_TIMEOUT
}

#[cfg(feature = "serde")]
fn default_block_timeout() -> Duration {
    DEFAULT_BLOCK_TIMEOUT
}

#[cfg(feature = "serde")]
fn default_connect_timeout() -> Duration {
    DEFAULT_CONNECT_TIMEOUT
}

impl ServerConfig {
    /// Create a new server configuration with default timeouts
    ///
    /// # Arguments
    ///
    /// * `host` - Server hostname
    /// * `port` - Server port
    /// * `tls` - Whether to use TLS
    /// * `username` - Authentication username
    /// * `password` - Authentication password
    pub fn new(
        host: impl Into<String>,
        port: u16,
        tls: bool,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            tls,
            allow_insecure_tls: false,
            username: username.into(),
            password: password.into(),
            read_timeout: DEFAULT_READ_TIMEOUT,
            block_timeout: DEFAULT_BLOCK_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Create a configuration for a TLS connection on the standard secure port (563)
    pub fn tls(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::new(host, 563, true, username, password)
    }

    /// Create a configuration for a plain connection on the standard port (119)
    ///
    /// **Warning:** Plain connections transmit credentials in clear text.
    /// Use TLS connections whenever possible.
    pub fn plain(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::new(host, 119, false, username, password)
    }

    /// Create a TLS configuration that accepts self-signed certificates
    ///
    /// **Security Warning:** This configuration disables certificate
    /// validation, making your connection vulnerable to man-in-the-middle
    /// attacks. Only use this for testing or with servers you trust on a
    /// secure network.
    pub fn tls_insecure(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let mut config = Self::tls(host, username, password);
        config.allow_insecure_tls = true;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let config = ServerConfig::new("news.example.com", 563, true, "user", "pass");
        assert_eq!(config.host, "news.example.com");
        assert_eq!(config.port, 563);
        assert!(config.tls);
        assert!(!config.allow_insecure_tls);
        assert_eq!(config.username, "user");
        assert_eq!(config.password, "pass");
    }

    #[test]
    fn test_tls_helper() {
        let config = ServerConfig::tls("news.example.com", "user", "pass");
        assert_eq!(config.port, 563);
        assert!(config.tls);
        assert!(!config.allow_insecure_tls);
    }

    #[test]
    fn test_plain_helper() {
        let config = ServerConfig::plain("news.example.com", "user", "pass");
        assert_eq!(config.port, 119);
        assert!(!config.tls);
        assert!(!config.allow_insecure_tls);
    }

    #[test]
    fn test_tls_insecure_helper() {
        let config = ServerConfig::tls_insecure("localhost", "user", "pass");
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 563);
        assert!(config.tls);
        assert!(config.allow_insecure_tls);
    }

    #[test]
    fn test_default_timeouts() {
        let config = ServerConfig::plain("news.example.com", "user", "pass");
        assert_eq!(config.read_timeout, Duration::from_secs(60));
        assert_eq!(config.block_timeout, Duration::from_secs(180));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert!(
            config.block_timeout > config.read_timeout,
            "block deadline must allow for large article bodies"
        );
    }
}
