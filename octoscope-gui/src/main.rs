use std::sync::Arc;

use iced::{
    Element, Task, Theme, application,
    widget::{button, column, container, row, space, text},
};
use parking_lot::RwLock;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::search::{self, Search},
    config::{Cfg, GuiConfig},
    icons::icon,
};

pub mod components;
pub mod config;
pub mod icons;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    Search(search::Message),
    ThemeToggled,
}

struct App {
    title: String,
    theme: Theme,
    cfg: Cfg,
    // Components
    search: Search,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        let cfg = Arc::new(RwLock::new(GuiConfig::load()));
        let theme = cfg.read().theme();

        let (search, search_task) = Search::new();

        (
            Self {
                title: "Octoscope".into(),
                theme,
                cfg,
                search,
            },
            search_task.map(Message::Search),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Redirect messages to the search component
            Message::Search(msg) => self.search.update(msg).map(Message::Search),
            Message::ThemeToggled => {
                let mut cfg = self.cfg.write();
                cfg.theme = cfg.theme.toggled();
                cfg.save();
                self.theme = cfg.theme();

                Task::none()
            }
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let top_bar = row![
            text("GitHub Profile Explorer").size(28),
            space::horizontal(),
            button(icon("theme"))
                .style(button::subtle)
                .on_press(Message::ThemeToggled),
        ]
        .align_y(iced::Center);

        container(
            column![top_bar, self.search.view().map(Message::Search)]
                .spacing(20)
                .max_width(520),
        )
        .center_x(iced::Fill)
        .padding(30)
        .into()
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }
}
