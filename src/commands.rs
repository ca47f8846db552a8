//! NNTP command builders and response parsers

use crate::error::{NntpError, Result};
use crate::response::NntpResponse;

// Command builders. Every command line carries its CRLF terminator so the
// session layer can hand it straight to the transport.

/// Build AUTHINFO USER command
pub fn authinfo_user(username: &str) -> String {
    format!("AUTHINFO USER {}\r\n", username)
}

/// Build AUTHINFO PASS command
pub fn authinfo_pass(password: &str) -> String {
    format!("AUTHINFO PASS {}\r\n", password)
}

/// Build GROUP command
pub fn group(newsgroup: &str) -> String {
    format!("GROUP {}\r\n", newsgroup)
}

/// Build LIST command
///
/// Lists all active newsgroups on the server.
pub fn list() -> &'static str {
    "LIST\r\n"
}

/// Build LIST ACTIVE command (RFC 3977 Section 7.6.3)
///
/// Lists active newsgroups matching the wildmat pattern.
pub fn list_active(wildmat: &str) -> String {
    format!("LIST ACTIVE {}\r\n", wildmat)
}

/// Build HEAD command
pub fn head(id: &str) -> String {
    format!("HEAD {}\r\n", id)
}

/// Build BODY command
pub fn body(id: &str) -> String {
    format!("BODY {}\r\n", id)
}

/// Build QUIT command
pub fn quit() -> &'static str {
    "QUIT\r\n"
}

/// Wrap an article identifier in angle brackets unless already wrapped
///
/// HEAD and BODY take a message-id in `<id>` form on the wire; callers
/// supply the bare id.
pub fn format_message_id(id: &str) -> String {
    if id.starts_with('<') && id.ends_with('>') {
        id.to_string()
    } else {
        format!("<{}>", id)
    }
}

/// Parse an NNTP status line into code and message
///
/// The leading 3 bytes must be ASCII digits; a 4th digit, a short line, or
/// a non-numeric prefix is rejected rather than sliced blindly.
pub fn parse_status_line(line: &str) -> Result<NntpResponse> {
    // Strip UTF-8 BOM if present (some broken servers/proxies add it)
    let line = line.trim_start_matches('\u{FEFF}');

    let bytes = line.as_bytes();
    if bytes.len() < 3
        || !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
        || !bytes[2].is_ascii_digit()
    {
        return Err(NntpError::InvalidResponse(line.chars().take(100).collect()));
    }

    // Catches malformed codes like "99999" being parsed as "999"
    if bytes.len() > 3 && bytes[3].is_ascii_digit() {
        return Err(NntpError::InvalidResponse(line.chars().take(100).collect()));
    }

    // Safe to slice since we verified ASCII
    let code = line[0..3]
        .parse::<u16>()
        .map_err(|_| NntpError::InvalidResponse(line.chars().take(100).collect()))?;

    let message = if line.len() > 3 {
        if bytes[3] == b' ' {
            line[4..].to_string()
        } else {
            // Missing space after the code; keep the full remainder
            line[3..].to_string()
        }
    } else {
        String::new()
    };

    Ok(NntpResponse { code, message })
}

/// Group selection summary parsed from a 211 reply
///
/// Response format: "211 number low high group" (RFC 3977 Section 6.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupInfo {
    /// Estimated number of articles in the group
    pub count: u64,
    /// Reported low water mark
    pub first: u64,
    /// Reported high water mark
    pub last: u64,
}

/// Parse the message of a 211 GROUP reply into [`GroupInfo`]
pub fn parse_group_response(response: &NntpResponse) -> Result<GroupInfo> {
    let mut parts = response.message.split_whitespace();

    let mut next_number = || -> Result<u64> {
        parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(|| NntpError::InvalidResponse(response.message.clone()))
    };

    Ok(GroupInfo {
        count: next_number()?,
        first: next_number()?,
        last: next_number()?,
    })
}

/// Test a group name against a listing pattern
///
/// Patterns containing `*` are matched as wildcards (each `*` spans any
/// run of characters); anything else is a plain substring test. Callers
/// short-circuit the empty pattern to match-all before getting here.
pub fn group_name_matches(name: &str, pattern: &str) -> bool {
    if pattern.contains('*') {
        wildcard_match(name.as_bytes(), pattern.as_bytes())
    } else {
        name.contains(pattern)
    }
}

fn wildcard_match(name: &[u8], pattern: &[u8]) -> bool {
    let (mut n, mut p) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        if p < pattern.len() && pattern[p] == b'*' {
            backtrack = Some((p, n));
            p += 1;
        } else if p < pattern.len() && pattern[p] == name[n] {
            n += 1;
            p += 1;
        } else if let Some((star, matched)) = backtrack {
            // Let the last star absorb one more character
            p = star + 1;
            n = matched + 1;
            backtrack = Some((star, matched + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&b| b == b'*')
}
