//! Client and data model for the GitHub profile-lookup API.

use thiserror::Error;

mod client;
mod profile;

pub use client::Client;
pub use profile::{DEFAULT_AVATAR_URL, Profile};

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by a profile lookup.
///
/// Both variants display a fixed, human-readable message; the underlying
/// transport error is kept as a source for diagnostics only.
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a non-success status.
    #[error("User not found")]
    NotFound,
    /// The request never completed, or the body could not be read as a profile.
    #[error("Failed to fetch user data")]
    Request(#[source] reqwest::Error),
}
