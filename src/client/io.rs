//! Low-level I/O for NNTP protocol communication
//!
//! Core primitives shared by every command implementation: command
//! transmission, status-line reads, and multi-line data block draining.
//! All reads run under the deadlines configured in
//! [`ServerConfig`](crate::ServerConfig).

use super::NntpClient;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::NntpResponse;
use tokio::time::timeout;
use tracing::trace;

impl NntpClient {
    /// Send a command line to the server
    pub(super) async fn send_command(&mut self, command: &str) -> Result<()> {
        trace!("C: {}", command.trim_end());
        self.stream.write_line(command).await?;
        Ok(())
    }

    /// Read and parse one status line
    pub(super) async fn read_status(&mut self) -> Result<NntpResponse> {
        let deadline = self.config.read_timeout;
        let read_future = async {
            let mut line = Vec::with_capacity(512);
            self.stream.read_line(&mut line).await?;

            if line.is_empty() {
                return Err(NntpError::ConnectionClosed);
            }

            let text = String::from_utf8_lossy(&line);
            let text = text.trim_end();
            trace!("S: {}", text);

            commands::parse_status_line(text)
        };

        timeout(deadline, read_future)
            .await
            .map_err(|_| NntpError::Timeout)?
    }

    /// Drain a multi-line data block, invoking `on_line` per content line
    ///
    /// Each callback receives the raw wire line including its terminator
    /// bytes. The block terminator (a line that is exactly ".\r\n" or
    /// ".\n") is checked first and never reaches the callback; an empty
    /// block is an empty result, not an error. End-of-stream before the
    /// terminator is a [`NntpError::ConnectionClosed`].
    pub(super) async fn read_data_block<F>(&mut self, mut on_line: F) -> Result<()>
    where
        F: FnMut(&[u8]) -> Result<()>,
    {
        let deadline = self.config.block_timeout;
        let read_future = async {
            loop {
                let mut line = Vec::with_capacity(512);
                self.stream.read_line(&mut line).await?;

                if line.is_empty() {
                    return Err(NntpError::ConnectionClosed);
                }

                if line == b".\r\n" || line == b".\n" {
                    return Ok(());
                }

                on_line(&line)?;
            }
        };

        timeout(deadline, read_future)
            .await
            .map_err(|_| NntpError::Timeout)?
    }
}

/// Check a status line against the single code the command requires
pub(super) fn expect_code(response: NntpResponse, expected: u16) -> Result<NntpResponse> {
    if response.code == expected {
        Ok(response)
    } else {
        Err(NntpError::Protocol {
            expected,
            code: response.code,
            message: response.message,
        })
    }
}

/// Strip the line terminator and NNTP dot-stuffing from a wire line
///
/// Only the trailing CRLF or LF is removed, never other whitespace; a
/// leading ".." collapses to "." per RFC 3977 Section 3.1.1.
pub(super) fn line_content(line: &[u8]) -> &[u8] {
    let end = if line.ends_with(b"\r\n") {
        line.len() - 2
    } else if line.ends_with(b"\n") {
        line.len() - 1
    } else {
        line.len()
    };

    let content = &line[..end];
    if content.starts_with(b"..") {
        &content[1..]
    } else {
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_code_match() {
        let response = NntpResponse {
            code: 211,
            message: "1 1 1 alt.test".to_string(),
        };
        let response = expect_code(response, 211).unwrap();
        assert_eq!(response.code, 211);
    }

    #[test]
    fn test_expect_code_mismatch_carries_both_codes() {
        let response = NntpResponse {
            code: 411,
            message: "no such group".to_string(),
        };
        match expect_code(response, 211) {
            Err(NntpError::Protocol {
                expected,
                code,
                message,
            }) => {
                assert_eq!(expected, 211);
                assert_eq!(code, 411);
                assert_eq!(message, "no such group");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_line_content_strips_terminators() {
        assert_eq!(line_content(b"data\r\n"), b"data");
        assert_eq!(line_content(b"data\n"), b"data");
        assert_eq!(line_content(b"data"), b"data");
        assert_eq!(line_content(b"\r\n"), b"");
    }

    #[test]
    fn test_line_content_preserves_inner_whitespace() {
        assert_eq!(line_content(b"data  \r\n"), b"data  ");
    }

    #[test]
    fn test_line_content_unstuffs_leading_dots() {
        assert_eq!(line_content(b"..leading\r\n"), b".leading");
        assert_eq!(line_content(b"...\r\n"), b"..");
        assert_eq!(line_content(b".single\r\n"), b".single");
    }
}
