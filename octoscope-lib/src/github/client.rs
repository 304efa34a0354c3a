use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use crate::{
    github::{Error, Profile, Result},
    search::Query,
};

const API_BASE: &str = "https://api.github.com";

/// Size in pixels requested for avatar thumbnails.
const AVATAR_SIZE: u32 = 260;

/// Thin wrapper around a shared HTTP client, preconfigured with the headers
/// the GitHub API expects from every caller. No authentication is sent.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
}

impl Client {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("octoscope"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(Error::Request)?;

        Ok(Self { http })
    }

    /// Look up a single profile by handle.
    ///
    /// Any non-success status is reported as [`Error::NotFound`] with the
    /// body discarded; transport failures and unreadable bodies share the
    /// [`Error::Request`] path.
    pub async fn fetch_profile(&self, query: &Query) -> Result<Profile> {
        let url = profile_endpoint(query);
        debug!(%url, "requesting profile");

        let response = self.http.get(&url).send().await.map_err(|err| {
            warn!(%err, "profile request failed");
            Error::Request(err)
        })?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "discarding non-success response");
            return Err(Error::NotFound);
        }

        response.json().await.map_err(|err| {
            warn!(%err, "profile response could not be decoded");
            Error::Request(err)
        })
    }

    /// Download avatar bytes, sized for the profile card.
    pub async fn fetch_avatar(&self, url: &str) -> Result<Vec<u8>> {
        let sized_url = if url.contains('?') {
            format!("{url}&s={AVATAR_SIZE}")
        } else {
            format!("{url}?s={AVATAR_SIZE}")
        };

        let bytes = self
            .http
            .get(&sized_url)
            .send()
            .await
            .map_err(Error::Request)?
            .bytes()
            .await
            .map_err(Error::Request)?;

        Ok(bytes.to_vec())
    }
}

/// Substitute the handle into the fixed lookup endpoint.
fn profile_endpoint(query: &Query) -> String {
    format!("{API_BASE}/users/{query}")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn endpoint_interpolates_normalized_query_verbatim() {
        let query = Query::parse("  octocat  ").unwrap();

        assert_eq!(
            profile_endpoint(&query),
            "https://api.github.com/users/octocat"
        );
    }

    #[test]
    fn not_found_message_is_fixed() {
        assert_eq!(Error::NotFound.to_string(), "User not found");
    }
}
