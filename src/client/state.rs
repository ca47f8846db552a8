//! Connection state types for NNTP client

/// Authentication progress of an NNTP connection
///
/// There is no `Closed` state: [`NntpClient::quit`](super::NntpClient::quit)
/// consumes the client, so a closed session cannot receive commands.
pub(super) enum ConnectionState {
    /// Connected and ready for commands (not authenticated)
    Ready,
    /// AUTHINFO USER sent, waiting for the PASS step to finish
    AuthInProgress,
    /// Successfully authenticated
    Authenticated,
}
