//! NNTP authentication (AUTHINFO USER/PASS, RFC 2980 Section 3.1.1)

use super::NntpClient;
use super::state::ConnectionState;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::{NntpResponse, codes};
use tracing::debug;

impl NntpClient {
    /// Send AUTHINFO USER
    ///
    /// Codes 482 (authentication rejected) and 502 (access denied) are
    /// errors; any other reply (typically 381 asking for the password, or
    /// 281 if the server needs no password) is returned to the caller,
    /// who drives the two-step sequence.
    pub async fn authinfo_user(&mut self, username: &str) -> Result<NntpResponse> {
        let cmd = commands::authinfo_user(username);
        self.send_command(&cmd).await?;
        self.state = ConnectionState::AuthInProgress;

        let response = self.read_status().await?;
        self.classify_auth_reply(response)
    }

    /// Send AUTHINFO PASS
    ///
    /// Same rejection codes as [`authinfo_user`](Self::authinfo_user); a
    /// 281 reply marks the session authenticated.
    pub async fn authinfo_pass(&mut self, password: &str) -> Result<NntpResponse> {
        let cmd = commands::authinfo_pass(password);
        self.send_command(&cmd).await?;

        let response = self.read_status().await?;
        let response = self.classify_auth_reply(response)?;

        if response.code == codes::AUTH_ACCEPTED {
            self.state = ConnectionState::Authenticated;
            debug!("Authentication successful");
        }
        Ok(response)
    }

    /// Authenticate with the credentials from the client configuration
    ///
    /// Drives the full AUTHINFO USER/PASS sequence: a 281 after USER
    /// finishes early, a 381 continues with PASS, and anything else is an
    /// authentication failure.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::AuthFailed`] - Invalid credentials or access denied
    /// - [`NntpError::ConnectionClosed`] - Server closed the connection
    /// - [`NntpError::Timeout`] - Server did not respond in time
    pub async fn authenticate(&mut self) -> Result<()> {
        debug!("Authenticating as {}", self.config.username);

        let username = self.config.username.clone();
        let response = self.authinfo_user(&username).await?;

        if response.code == codes::AUTH_ACCEPTED {
            self.state = ConnectionState::Authenticated;
            return Ok(());
        }
        if response.code != codes::AUTH_CONTINUE {
            self.state = ConnectionState::Ready;
            return Err(NntpError::AuthFailed {
                code: response.code,
                message: response.message,
            });
        }

        let password = self.config.password.clone();
        let response = self.authinfo_pass(&password).await?;

        if response.code != codes::AUTH_ACCEPTED {
            self.state = ConnectionState::Ready;
            return Err(NntpError::AuthFailed {
                code: response.code,
                message: response.message,
            });
        }
        Ok(())
    }

    /// Turn the explicit AUTHINFO rejection codes into errors
    fn classify_auth_reply(&mut self, response: NntpResponse) -> Result<NntpResponse> {
        match response.code {
            codes::AUTH_REJECTED | codes::ACCESS_DENIED => {
                self.state = ConnectionState::Ready;
                Err(NntpError::AuthFailed {
                    code: response.code,
                    message: response.message,
                })
            }
            _ => Ok(response),
        }
    }
}
