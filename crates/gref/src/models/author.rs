//! Author reference as embedded in papers.

use serde::{Deserialize, Serialize};

/// Minimal author reference (used in paper author lists).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
}

impl AuthorRef {
    /// Get the author name or "Unknown".
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// Family name: the last word of the display name.
    #[must_use]
    pub fn surname(&self) -> &str {
        let name = self.name_or_default().trim();
        name.rsplit(char::is_whitespace).next().filter(|s| !s.is_empty()).unwrap_or(name)
    }
}
