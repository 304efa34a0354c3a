use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Avatar shown when a profile has none of its own.
pub const DEFAULT_AVATAR_URL: &str = "https://avatars.githubusercontent.com/u/143387296?v=4";

const NAME_PLACEHOLDER: &str = "Unknown user";
const HANDLE_PLACEHOLDER: &str = "username";
const BIO_PLACEHOLDER: &str = "No bio available";

/// A public profile as returned by the `/users/{username}` endpoint.
///
/// Counters absent from the payload deserialize to zero so the stat tiles
/// always have a value to show; unknown payload fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub location: Option<String>,
    pub company: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub html_url: Option<String>,
}

impl Profile {
    /// Whether there is anything worth putting on a card.
    pub fn is_populated(&self) -> bool {
        !self.login.is_empty() || self.name.is_some()
    }

    /// Heading for the card: real name, then login, then a placeholder.
    ///
    /// An empty string from the payload counts as absent.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => name,
            None if self.login.is_empty() => NAME_PLACEHOLDER,
            None => &self.login,
        }
    }

    /// Login handle, rendered with an `@` prefix.
    pub fn handle(&self) -> &str {
        if self.login.is_empty() {
            HANDLE_PLACEHOLDER
        } else {
            &self.login
        }
    }

    pub fn bio_text(&self) -> &str {
        self.bio
            .as_deref()
            .filter(|bio| !bio.is_empty())
            .unwrap_or(BIO_PLACEHOLDER)
    }

    pub fn avatar_or_default(&self) -> &str {
        self.avatar_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_AVATAR_URL)
    }

    /// Account creation date formatted for display, e.g. `January 25, 2011`.
    pub fn joined_date(&self) -> Option<String> {
        self.created_at
            .map(|created| created.format("%B %-d, %Y").to_string())
    }
}
