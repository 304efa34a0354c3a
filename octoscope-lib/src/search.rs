//! The fetch-and-render lifecycle of a profile search.
//!
//! All UI state lives in a single serializable [`SearchSession`] value and
//! every transition goes through it, so exactly one display variant is
//! active at any time.

use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

use crate::github::Profile;

/// A normalized, non-empty username ready for lookup.
///
/// Surrounding whitespace is stripped; internal whitespace is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Deref, Display, Serialize, Deserialize)]
pub struct Query(String);

impl Query {
    /// Normalize raw input. Returns [`None`] when nothing but whitespace remains.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();

        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifies one dispatched lookup so superseded completions can be discarded.
pub type Token = u64;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum SearchState {
    /// No search performed yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last search failed; the message is ready for display.
    Failed(String),
    /// The last search succeeded.
    Loaded(Profile),
}

/// Tracks the profile searches of one component instance.
///
/// Each dispatched search gets a monotonically increasing [`Token`]. A
/// completion is applied only while its token is still the latest one, so
/// the most recently dispatched search always decides the final state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSession {
    state: SearchState,
    token: Token,
    completed: bool,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading)
    }

    /// Whether `token` belongs to the most recently dispatched search.
    pub fn is_current(&self, token: Token) -> bool {
        self.token == token
    }

    /// Start a new search, superseding whatever came before.
    ///
    /// Clears any previous error and enters [`SearchState::Loading`]. The
    /// returned token must be handed back to [`SearchSession::resolve`]
    /// together with the outcome.
    pub fn begin(&mut self) -> Token {
        self.token += 1;
        self.state = SearchState::Loading;

        self.token
    }

    /// Apply the outcome of the search identified by `token`.
    ///
    /// Returns `false` when the token has been superseded by a newer
    /// dispatch; the outcome is discarded and the in-flight state is left
    /// untouched.
    pub fn resolve(&mut self, token: Token, outcome: Result<Profile, String>) -> bool {
        if !self.is_current(token) {
            return false;
        }

        self.completed = true;
        self.state = match outcome {
            Ok(profile) => SearchState::Loaded(profile),
            Err(message) => SearchState::Failed(message),
        };

        true
    }

    /// Record a failure that did not come from a search, e.g. the HTTP
    /// client could not be constructed at startup.
    pub fn fail(&mut self, message: String) {
        self.state = SearchState::Failed(message);
    }

    /// Reduce the current state to the variant that should be rendered.
    ///
    /// Priority: loading, then a populated profile, then the welcome panel,
    /// then nothing. A failure recorded before any search has completed
    /// keeps the welcome panel visible underneath the message.
    pub fn view(&self) -> View<'_> {
        match &self.state {
            SearchState::Loading => View::Loading,
            SearchState::Failed(message) if self.completed => View::Failure { message },
            SearchState::Failed(message) => View::FailureWelcome { message },
            SearchState::Loaded(profile) if profile.is_populated() => View::Card(profile),
            SearchState::Loaded(_) => View::Empty,
            SearchState::Idle => View::Welcome,
        }
    }
}

/// The mutually exclusive display variants of the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    /// A request is in flight; everything else is suppressed.
    Loading,
    /// A completed search with a profile worth showing.
    Card(&'a Profile),
    /// A failure after at least one completed search: message only.
    Failure { message: &'a str },
    /// A failure before any search ever completed: message above the
    /// welcome panel.
    FailureWelcome { message: &'a str },
    /// No search performed yet.
    Welcome,
    /// A completed search with nothing to show.
    Empty,
}

#[cfg(test)]
mod test {
    use super::*;

    fn profile(login: &str) -> Profile {
        Profile {
            login: login.into(),
            ..Profile::default()
        }
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        assert_eq!(Query::parse("  octocat  ").unwrap().as_str(), "octocat");
    }

    #[test]
    fn parse_preserves_internal_whitespace() {
        assert_eq!(Query::parse(" mona lisa ").unwrap().as_str(), "mona lisa");
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert!(Query::parse("").is_none());
        assert!(Query::parse("   ").is_none());
    }

    #[test]
    fn new_session_is_idle_and_welcoming() {
        let session = SearchSession::new();

        assert_eq!(session.state(), &SearchState::Idle);
        assert!(matches!(session.view(), View::Welcome));
    }

    #[test]
    fn begin_enters_loading_and_clears_failure() {
        let mut session = SearchSession::new();

        let token = session.begin();
        session.resolve(token, Err("User not found".into()));

        session.begin();

        assert!(session.is_loading());
        assert!(matches!(session.view(), View::Loading));
    }

    #[test]
    fn resolve_success_shows_card() {
        let mut session = SearchSession::new();

        let token = session.begin();
        assert!(session.resolve(token, Ok(profile("octocat"))));

        assert!(matches!(session.view(), View::Card(p) if p.login == "octocat"));
        assert!(!session.is_loading());
    }

    #[test]
    fn resolve_failure_discards_previous_profile() {
        let mut session = SearchSession::new();

        let token = session.begin();
        session.resolve(token, Ok(profile("octocat")));

        let token = session.begin();
        session.resolve(token, Err("User not found".into()));

        assert_eq!(session.state(), &SearchState::Failed("User not found".into()));
        assert!(matches!(
            session.view(),
            View::Failure {
                message: "User not found"
            }
        ));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut session = SearchSession::new();

        let first = session.begin();
        let second = session.begin();

        // The superseded completion is dropped; the newer dispatch still
        // owns the loading flag.
        assert!(!session.resolve(first, Ok(profile("first"))));
        assert!(session.is_loading());

        assert!(session.resolve(second, Ok(profile("second"))));
        assert!(matches!(session.view(), View::Card(p) if p.login == "second"));
    }

    #[test]
    fn failure_before_any_completed_search_keeps_welcome() {
        let mut session = SearchSession::new();

        session.fail("Failed to fetch user data".into());

        assert!(matches!(session.view(), View::FailureWelcome { .. }));
    }

    #[test]
    fn unpopulated_profile_renders_nothing() {
        let mut session = SearchSession::new();

        let token = session.begin();
        session.resolve(token, Ok(Profile::default()));

        assert!(matches!(session.view(), View::Empty));
    }

    #[test]
    fn repeated_search_is_idempotent() {
        let mut session = SearchSession::new();

        for _ in 0..2 {
            let token = session.begin();
            session.resolve(token, Ok(profile("octocat")));
        }

        assert!(matches!(session.view(), View::Card(p) if p.login == "octocat"));
    }

    #[test]
    fn session_round_trips_through_serde() {
        let mut session = SearchSession::new();
        let token = session.begin();
        session.resolve(token, Ok(profile("octocat")));

        let json = serde_json::to_string(&session).unwrap();
        let restored: SearchSession = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, session);
    }
}
