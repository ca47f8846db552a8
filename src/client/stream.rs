//! Line transport over plain TCP or TLS
//!
//! This module owns byte-level line framing and nothing else: CRLF is
//! appended on writes, reads stop at the first LF byte, and protocol
//! semantics live entirely in the session layer above.

use std::io;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio_rustls::client::TlsStream;
use tracing::trace;

pub(super) trait NntpIo: AsyncRead + AsyncWrite + Send + Unpin {}

impl<T> NntpIo for T where T: AsyncRead + AsyncWrite + Send + Unpin {}

/// Bidirectional line-oriented byte stream
///
/// The plain arm is a trait object so tests can drive the transport with
/// an in-memory duplex pipe.
pub(super) enum NntpStream {
    Plain(BufReader<Box<dyn NntpIo>>),
    Tls(Box<BufReader<TlsStream<TcpStream>>>),
}

impl NntpStream {
    /// Read one line into `buf`, including its terminator bytes
    ///
    /// Stops after the first LF byte or at end-of-stream. A stream that
    /// ends mid-line yields the partial bytes (possibly none) without an
    /// error; classifying that is the caller's job.
    pub(super) async fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        match self {
            NntpStream::Plain(reader) => reader.read_until(b'\n', buf).await,
            NntpStream::Tls(reader) => reader.read_until(b'\n', buf).await,
        }
    }

    /// Write one line, appending CRLF if `line` does not already end with it
    pub(super) async fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut owned;
        let line = if line.ends_with("\r\n") {
            line
        } else {
            owned = String::with_capacity(line.len() + 2);
            owned.push_str(line);
            owned.push_str("\r\n");
            &owned
        };

        match self {
            NntpStream::Plain(reader) => {
                let stream = reader.get_mut();
                stream.write_all(line.as_bytes()).await?;
                stream.flush().await
            }
            NntpStream::Tls(reader) => {
                let stream = reader.get_mut();
                stream.write_all(line.as_bytes()).await?;
                stream.flush().await
            }
        }
    }

    /// Best-effort close of the write half; failures are only logged
    pub(super) async fn shutdown(&mut self) {
        let result = match self {
            NntpStream::Plain(reader) => reader.get_mut().shutdown().await,
            NntpStream::Tls(reader) => reader.get_mut().shutdown().await,
        };
        if let Err(e) = result {
            trace!("shutdown after close failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    fn plain(stream: impl NntpIo + 'static) -> NntpStream {
        NntpStream::Plain(BufReader::new(Box::new(stream)))
    }

    #[tokio::test]
    async fn read_line_stops_at_lf() {
        let (client, mut server) = tokio::io::duplex(64);
        server.write_all(b"200 hello\r\n205 bye\r\n").await.unwrap();

        let mut stream = plain(client);
        let mut buf = Vec::new();
        stream.read_line(&mut buf).await.unwrap();
        assert_eq!(buf, b"200 hello\r\n");

        buf.clear();
        stream.read_line(&mut buf).await.unwrap();
        assert_eq!(buf, b"205 bye\r\n");
    }

    #[tokio::test]
    async fn read_line_accepts_bare_lf() {
        let (client, mut server) = tokio::io::duplex(64);
        server.write_all(b"200 hello\n").await.unwrap();

        let mut stream = plain(client);
        let mut buf = Vec::new();
        stream.read_line(&mut buf).await.unwrap();
        assert_eq!(buf, b"200 hello\n");
    }

    #[tokio::test]
    async fn read_line_returns_partial_bytes_at_eof() {
        let (client, mut server) = tokio::io::duplex(64);
        server.write_all(b"no terminator").await.unwrap();
        drop(server);

        let mut stream = plain(client);
        let mut buf = Vec::new();
        let n = stream.read_line(&mut buf).await.unwrap();
        assert_eq!(n, 13);
        assert_eq!(buf, b"no terminator");
    }

    #[tokio::test]
    async fn read_line_returns_zero_at_immediate_eof() {
        let (client, server) = tokio::io::duplex(64);
        drop(server);

        let mut stream = plain(client);
        let mut buf = Vec::new();
        let n = stream.read_line(&mut buf).await.unwrap();
        assert_eq!(n, 0);
        assert!(buf.is_empty());
    }

    #[tokio::test]
    async fn write_line_appends_crlf_only_when_missing() {
        let (client, mut server) = tokio::io::duplex(64);

        let mut stream = plain(client);
        stream.write_line("QUIT").await.unwrap();
        stream.write_line("GROUP alt.test\r\n").await.unwrap();
        drop(stream);

        let mut sent = Vec::new();
        server.read_to_end(&mut sent).await.unwrap();
        assert_eq!(sent, b"QUIT\r\nGROUP alt.test\r\n");
    }
}
