//! Article retrieval (RFC 3977 Section 6.2)
//!
//! HEAD and BODY are independent fetches; [`NntpClient::fetch_article`]
//! composes them without any transactional link between the two.

use super::NntpClient;
use super::io::{expect_code, line_content};
use crate::article::{self, Article, Headers};
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::codes;
use tracing::trace;

impl NntpClient {
    /// Fetch article headers by message-id
    ///
    /// Sends `HEAD <id>` (angle brackets added if absent), expects 221,
    /// and parses each block line into a (name, value) pair in wire order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::InvalidArgument`] - Empty id (no I/O performed)
    /// - [`NntpError::Protocol`] - Any reply other than 221
    /// - [`NntpError::InvalidResponse`] - A header line without a colon
    pub async fn fetch_headers(&mut self, id: &str) -> Result<Headers> {
        require_article_id(id)?;
        trace!("Fetching headers: {}", id);

        let cmd = commands::head(&commands::format_message_id(id));
        self.send_command(&cmd).await?;
        let response = self.read_status().await?;
        expect_code(response, codes::HEAD_FOLLOWS)?;

        let mut headers = Headers::new();
        self.read_data_block(|line| {
            let text = String::from_utf8_lossy(line_content(line));
            let (name, value) = article::parse_header_line(&text)?;
            headers.push(name, value);
            Ok(())
        })
        .await?;

        Ok(headers)
    }

    /// Fetch the raw article body by message-id
    ///
    /// Sends `BODY <id>`, expects 222, and returns the accumulated body
    /// with each received line terminated by CRLF.
    pub async fn fetch_body(&mut self, id: &str) -> Result<String> {
        self.fetch_body_with(id, |_, _| {}).await
    }

    /// Fetch the article body, observing each line as it arrives
    ///
    /// `observer` runs synchronously for every content line, receiving the
    /// raw wire bytes (terminator included, dot-stuffing intact) and a
    /// zero-based line index. The block terminator is checked first and is
    /// never delivered to the observer.
    pub async fn fetch_body_with<F>(&mut self, id: &str, mut observer: F) -> Result<String>
    where
        F: FnMut(&[u8], usize),
    {
        require_article_id(id)?;
        trace!("Fetching body: {}", id);

        let cmd = commands::body(&commands::format_message_id(id));
        self.send_command(&cmd).await?;
        let response = self.read_status().await?;
        expect_code(response, codes::BODY_FOLLOWS)?;

        let mut body = String::new();
        let mut index = 0;
        self.read_data_block(|line| {
            observer(line, index);
            index += 1;

            body.push_str(&String::from_utf8_lossy(line_content(line)));
            body.push_str("\r\n");
            Ok(())
        })
        .await?;

        Ok(body)
    }

    /// Fetch a complete article: headers, then body
    ///
    /// The two fetches are independent commands; a server-side change
    /// between them is possible and not guarded against. A failed body
    /// fetch after successful headers leaves nothing to roll back; the
    /// error simply surfaces.
    pub async fn fetch_article(&mut self, id: &str) -> Result<Article> {
        require_article_id(id)?;

        let headers = self.fetch_headers(id).await?;
        let body = self.fetch_body(id).await?;

        Ok(Article {
            id: id.to_string(),
            headers,
            body,
        })
    }
}

fn require_article_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        Err(NntpError::InvalidArgument("article id"))
    } else {
        Ok(())
    }
}
