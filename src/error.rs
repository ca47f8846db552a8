//! NNTP error types

use thiserror::Error;

/// NNTP protocol and connection errors
#[derive(Error, Debug)]
pub enum NntpError {
    /// IO error during network operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TLS error during secure connection
    #[error("TLS error: {0}")]
    Tls(String),

    /// Read deadline expired
    #[error("Read timeout")]
    Timeout,

    /// A required argument was empty; detected before any I/O
    #[error("Missing required {0}")]
    InvalidArgument(&'static str),

    /// Response from server could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Server replied with a different code than the command requires
    #[error("NNTP error: expected {expected}, got {code}: {message}")]
    Protocol {
        /// The single response code the command requires
        expected: u16,
        /// Response code the server actually sent
        code: u16,
        /// Raw status text from the server
        message: String,
    },

    /// Authentication rejected by the server
    #[error("Authentication failed ({code}): {message}")]
    AuthFailed {
        /// NNTP response code (482 or 502)
        code: u16,
        /// Error message from server
        message: String,
    },

    /// Connection closed unexpectedly
    #[error("Connection closed")]
    ConnectionClosed,
}

/// Result type alias using NntpError
pub type Result<T> = std::result::Result<T, NntpError>;
