//! Connection management for NNTP client
//!
//! Handles TCP/TLS establishment, server greeting validation, and the
//! QUIT handshake. Certificate handling follows the configuration:
//! webpki roots by default, or an accept-anything verifier when
//! `allow_insecure_tls` is set.

use super::NntpClient;
use super::state::ConnectionState;
use super::stream::{NntpIo, NntpStream};
use crate::commands;
use crate::config::ServerConfig;
use crate::error::{NntpError, Result};
use crate::response::{NntpResponse, codes};
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_rustls::TlsConnector;
use tokio_rustls::client::TlsStream;
use tokio_rustls::rustls::client::danger::{
    HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier,
};
use tokio_rustls::rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use tokio_rustls::rustls::{ClientConfig, DigitallySignedStruct, RootCertStore, SignatureScheme};
use tracing::{debug, warn};

/// Certificate verifier that accepts all certificates
///
/// **Security Warning:** disables all certificate validation, making the
/// connection vulnerable to man-in-the-middle attacks. Only reachable via
/// `allow_insecure_tls`.
#[derive(Debug)]
struct DangerousAcceptAnyCertificate;

impl ServerCertVerifier for DangerousAcceptAnyCertificate {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> std::result::Result<ServerCertVerified, tokio_rustls::rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, tokio_rustls::rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, tokio_rustls::rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        vec![
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
            SignatureScheme::ECDSA_NISTP256_SHA256,
            SignatureScheme::ECDSA_NISTP384_SHA384,
            SignatureScheme::ECDSA_NISTP521_SHA512,
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
            SignatureScheme::ED25519,
            SignatureScheme::ED448,
        ]
    }
}

impl NntpClient {
    /// Connect to an NNTP server and validate the greeting
    ///
    /// Establishes the transport (TLS when `config.tls` is set), reads the
    /// server greeting, and requires code 200. Does not authenticate;
    /// call [`authenticate`](Self::authenticate) after connecting.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::Io`] - TCP connection fails
    /// - [`NntpError::Tls`] - TLS handshake fails
    /// - [`NntpError::Timeout`] - Connect, handshake, or greeting read
    ///   exceeds its configured deadline
    /// - [`NntpError::Protocol`] - Greeting code is not 200
    pub async fn connect(config: Arc<ServerConfig>) -> Result<Self> {
        Self::connect_with_greeting_check(config, |_| false).await
    }

    /// Connect, giving `accept` a chance to tolerate a nonstandard greeting
    ///
    /// On a non-200 greeting the closure observes the parsed status line
    /// before the error is raised; returning `true` suppresses the error
    /// and yields a connected client. This hook exists only at connect
    /// time; every other command checks its expected code strictly.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nntp_session::{NntpClient, ServerConfig};
    /// # use std::sync::Arc;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Arc::new(ServerConfig::plain("news.example.com", "", ""));
    /// // Tolerate read-only servers greeting with 201
    /// let client = NntpClient::connect_with_greeting_check(config, |greeting| {
    ///     greeting.code == 201
    /// })
    /// .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect_with_greeting_check<F>(config: Arc<ServerConfig>, accept: F) -> Result<Self>
    where
        F: FnOnce(&NntpResponse) -> bool,
    {
        debug!("Connecting to NNTP server {}:{}", config.host, config.port);

        let tcp = timeout(
            config.connect_timeout,
            TcpStream::connect((config.host.as_str(), config.port)),
        )
        .await
        .map_err(|_| NntpError::Timeout)??;

        // Low-latency request/response pattern; disable Nagle
        tcp.set_nodelay(true)?;

        let stream = if config.tls {
            let tls = timeout(config.connect_timeout, tls_connect(tcp, &config))
                .await
                .map_err(|_| NntpError::Timeout)??;
            NntpStream::Tls(Box::new(BufReader::new(tls)))
        } else {
            NntpStream::Plain(BufReader::new(Box::new(tcp) as Box<dyn NntpIo>))
        };

        let mut client = Self {
            stream,
            state: ConnectionState::Ready,
            config,
        };

        let greeting = client.read_status().await?;
        debug!("Server greeting: {} {}", greeting.code, greeting.message);

        if greeting.code != codes::READY_POSTING_ALLOWED {
            if accept(&greeting) {
                debug!("Nonstandard greeting code {} accepted by caller", greeting.code);
            } else {
                client.stream.shutdown().await;
                return Err(NntpError::Protocol {
                    expected: codes::READY_POSTING_ALLOWED,
                    code: greeting.code,
                    message: greeting.message,
                });
            }
        }

        Ok(client)
    }

    /// Close the connection gracefully (RFC 3977 Section 5.4)
    ///
    /// Sends QUIT and expects 205. The transport is shut down and released
    /// on every path, including I/O failure and a mismatched reply code,
    /// so a refused QUIT still leaves the socket closed; the mismatch is
    /// reported afterwards.
    pub async fn quit(mut self) -> Result<()> {
        debug!("Closing NNTP connection");

        let exchange = self.quit_exchange().await;
        self.stream.shutdown().await;

        let response = exchange?;
        if response.code != codes::CLOSING_CONNECTION {
            return Err(NntpError::Protocol {
                expected: codes::CLOSING_CONNECTION,
                code: response.code,
                message: response.message,
            });
        }
        Ok(())
    }

    async fn quit_exchange(&mut self) -> Result<NntpResponse> {
        self.send_command(commands::quit()).await?;
        self.read_status().await
    }
}

async fn tls_connect(tcp: TcpStream, config: &ServerConfig) -> Result<TlsStream<TcpStream>> {
    use tokio_rustls::rustls::crypto::{CryptoProvider, ring};
    let _ = CryptoProvider::install_default(ring::default_provider());

    let tls_config = if config.allow_insecure_tls {
        warn!("TLS certificate validation disabled - connection vulnerable to MITM attacks");
        ClientConfig::builder()
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(DangerousAcceptAnyCertificate))
            .with_no_client_auth()
    } else {
        let mut root_store = RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth()
    };

    let connector = TlsConnector::from(Arc::new(tls_config));
    let server_name = ServerName::try_from(config.host.as_str())
        .map_err(|e| NntpError::Tls(format!("invalid server name: {}", e)))?
        .to_owned();

    connector
        .connect(server_name, tcp)
        .await
        .map_err(|e| NntpError::Tls(format!("TLS handshake failed: {}", e)))
}
