//! Newsgroup selection and listing (RFC 3977 Sections 6.1.1 and 7.6)

use super::NntpClient;
use super::io::{expect_code, line_content};
use crate::commands::{self, GroupInfo};
use crate::error::{NntpError, Result};
use crate::response::codes;
use tracing::debug;

impl NntpClient {
    /// Select a newsgroup as the server's current context
    ///
    /// Expects 211 and returns the reported [`GroupInfo`]. The selection
    /// lives on the server; nothing is cached client-side.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::InvalidArgument`] - Empty group name (no I/O performed)
    /// - [`NntpError::Protocol`] - Any reply other than 211 (e.g. 411)
    /// - [`NntpError::InvalidResponse`] - Unparseable 211 statistics
    pub async fn select_group(&mut self, newsgroup: &str) -> Result<GroupInfo> {
        if newsgroup.trim().is_empty() {
            return Err(NntpError::InvalidArgument("group name"));
        }

        debug!("Selecting newsgroup: {}", newsgroup);

        let cmd = commands::group(newsgroup);
        self.send_command(&cmd).await?;
        let response = self.read_status().await?;
        let response = expect_code(response, codes::GROUP_SELECTED)?;

        let info = commands::parse_group_response(&response)?;
        debug!(
            "Group {} selected: {} articles ({}-{})",
            newsgroup, info.count, info.first, info.last
        );
        Ok(info)
    }

    /// List newsgroup names, optionally filtered by a pattern
    ///
    /// An empty pattern sends `LIST` and returns every group; a non-empty
    /// pattern sends `LIST ACTIVE <pattern>` and additionally filters each
    /// received line with [`commands::group_name_matches`] as it is
    /// accumulated, since servers differ in how much filtering they apply
    /// themselves. Server order is preserved; the group name is the first
    /// whitespace-delimited token of each line.
    pub async fn list_groups(&mut self, pattern: &str) -> Result<Vec<String>> {
        debug!(
            "Listing groups{}",
            if pattern.is_empty() {
                String::new()
            } else {
                format!(" matching {}", pattern)
            }
        );

        let cmd = if pattern.is_empty() {
            commands::list().to_string()
        } else {
            commands::list_active(pattern)
        };
        self.send_command(&cmd).await?;

        let response = self.read_status().await?;
        expect_code(response, codes::LIST_INFORMATION_FOLLOWS)?;

        let mut groups = Vec::new();
        self.read_data_block(|line| {
            let text = String::from_utf8_lossy(line_content(line));
            if let Some(name) = text.split_whitespace().next() {
                // Empty pattern means match-all; skip the matcher entirely
                if pattern.is_empty() || commands::group_name_matches(name, pattern) {
                    groups.push(name.to_string());
                }
            }
            Ok(())
        })
        .await?;

        debug!("Listed {} groups", groups.len());
        Ok(groups)
    }
}
