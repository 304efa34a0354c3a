use iced::{
    Element, Task,
    widget::{button, column, container, image, row, text, text_input},
};
use octoscope_lib::{Client, Profile, Query, SearchSession, SearchState, Token, View};
use tracing::{debug, warn};

pub mod card;

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    SubmitPressed,
    Completed {
        token: Token,
        outcome: Result<Profile, String>,
    },
    AvatarLoaded {
        token: Token,
        bytes: Option<Vec<u8>>,
    },
    ProfileLinkPressed(String),
    FollowPressed,
}

/// The profile search widget: query input, fetch dispatch, and the four
/// display regions driven by the session's reducer.
pub struct Search {
    client: Option<Client>,
    input: String,
    session: SearchSession,
    avatar: Option<image::Handle>,
}

impl Search {
    pub fn new() -> (Self, Task<Message>) {
        let mut session = SearchSession::new();

        let client = match Client::new() {
            Ok(client) => Some(client),
            Err(err) => {
                warn!(%err, "could not construct the HTTP client");
                session.fail(err.to_string());
                None
            }
        };

        (
            Self {
                client,
                input: "".into(),
                session,
                avatar: None,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(input) => {
                self.input = input;
                Task::none()
            }
            Message::SubmitPressed => self.submit(),
            Message::Completed { token, outcome } => {
                if !self.session.resolve(token, outcome) {
                    // Superseded by a newer search
                    return Task::none();
                }

                self.avatar = None;
                self.load_avatar(token)
            }
            Message::AvatarLoaded { token, bytes } => {
                if self.session.is_current(token)
                    && let Some(bytes) = bytes
                {
                    self.avatar = Some(image::Handle::from_bytes(bytes));
                }

                Task::none()
            }
            Message::ProfileLinkPressed(url) => {
                let _ = open::that(url);
                Task::none()
            }
            // Decorative only
            Message::FollowPressed => Task::none(),
        }
    }

    /// Normalize the input and dispatch a lookup. Blank input is a no-op.
    fn submit(&mut self) -> Task<Message> {
        let Some(query) = Query::parse(&self.input) else {
            return Task::none();
        };
        let Some(client) = self.client.clone() else {
            return Task::none();
        };

        let token = self.session.begin();
        debug!(%query, token, "dispatching profile lookup");

        Task::perform(
            async move {
                client
                    .fetch_profile(&query)
                    .await
                    .map_err(|err| err.to_string())
            },
            move |outcome| Message::Completed { token, outcome },
        )
    }

    /// Fetch the freshly loaded profile's avatar as a follow-up step.
    fn load_avatar(&self, token: Token) -> Task<Message> {
        let (Some(client), SearchState::Loaded(profile)) =
            (self.client.clone(), self.session.state())
        else {
            return Task::none();
        };

        let url = profile.avatar_or_default().to_owned();

        Task::perform(
            async move { client.fetch_avatar(&url).await.ok() },
            move |bytes| Message::AvatarLoaded { token, bytes },
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let search_bar = row![
            text_input("Enter GitHub username", &self.input)
                .on_input(Message::InputChanged)
                .on_submit(Message::SubmitPressed)
                .padding(10),
            button("Search").on_press(Message::SubmitPressed),
        ]
        .spacing(10);

        let body: Element<'_, Message> = match self.session.view() {
            View::Loading => container(text("Loading profile...")).padding(20).into(),
            View::Card(profile) => card::view(profile, self.avatar.as_ref()),
            View::Failure { message } => error_banner(message),
            View::FailureWelcome { message } => {
                column![error_banner(message), card::welcome()]
                    .spacing(20)
                    .into()
            }
            View::Welcome => card::welcome(),
            View::Empty => column![].into(),
        };

        column![search_bar, body].spacing(20).into()
    }
}

fn error_banner(message: &str) -> Element<'_, Message> {
    container(text(message).style(text::danger)).padding(10).into()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn blank_submit_is_a_no_op() {
        let (mut search, _task) = Search::new();

        let _ = search.update(Message::InputChanged("   ".into()));
        let _ = search.update(Message::SubmitPressed);

        assert!(matches!(search.session.view(), View::Welcome));
    }

    #[test]
    fn completion_with_current_token_shows_card() {
        let (mut search, _task) = Search::new();

        let _ = search.update(Message::InputChanged("octocat".into()));
        let _ = search.update(Message::SubmitPressed);

        let profile = Profile {
            login: "octocat".into(),
            ..Profile::default()
        };
        let _ = search.update(Message::Completed {
            token: 1,
            outcome: Ok(profile),
        });

        assert!(matches!(search.session.view(), View::Card(_)));
    }

    #[test]
    fn stale_completion_leaves_newer_search_loading() {
        let (mut search, _task) = Search::new();

        let _ = search.update(Message::InputChanged("octocat".into()));
        let _ = search.update(Message::SubmitPressed);
        let _ = search.update(Message::SubmitPressed);

        let _ = search.update(Message::Completed {
            token: 1,
            outcome: Err("User not found".into()),
        });

        assert!(matches!(search.session.view(), View::Loading));
    }
}
