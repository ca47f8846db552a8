//! NNTP response types and status codes

/// A parsed NNTP status line: 3-digit response code plus free-text remainder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NntpResponse {
    /// 3-digit NNTP response code
    pub code: u16,
    /// Status message from server
    pub message: String,
}

impl NntpResponse {
    /// Check if response indicates success (2xx)
    pub fn is_success(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Check if response indicates continuation (3xx)
    pub fn is_continuation(&self) -> bool {
        self.code >= 300 && self.code < 400
    }

    /// Check if response indicates error (4xx or 5xx)
    pub fn is_error(&self) -> bool {
        self.code >= 400
    }
}

/// NNTP response codes (RFC 3977, RFC 2980 AUTHINFO)
pub mod codes {
    /// Server ready, posting allowed (connection greeting)
    pub const READY_POSTING_ALLOWED: u16 = 200;
    /// Server ready, no posting
    pub const READY_NO_POSTING: u16 = 201;
    /// Closing connection (reply to QUIT)
    pub const CLOSING_CONNECTION: u16 = 205;
    /// Group selected
    pub const GROUP_SELECTED: u16 = 211;
    /// List of newsgroups follows (RFC 3977 Section 7.6)
    pub const LIST_INFORMATION_FOLLOWS: u16 = 215;
    /// Head follows
    pub const HEAD_FOLLOWS: u16 = 221;
    /// Body follows
    pub const BODY_FOLLOWS: u16 = 222;
    /// Authentication accepted
    pub const AUTH_ACCEPTED: u16 = 281;
    /// Continue with authentication (password required)
    pub const AUTH_CONTINUE: u16 = 381;
    /// No such newsgroup
    pub const NO_SUCH_GROUP: u16 = 411;
    /// Authentication rejected (RFC 2980 Section 3.1.1)
    pub const AUTH_REJECTED: u16 = 482;
    /// Access denied / command unavailable
    pub const ACCESS_DENIED: u16 = 502;
}
