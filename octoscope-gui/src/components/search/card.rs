use iced::{
    Center, Element,
    widget::{button, column, container, image, row, text},
};
use octoscope_lib::Profile;

use crate::icons::icon;

use super::Message;

/// Render the profile card for a loaded profile.
pub fn view<'a>(profile: &'a Profile, avatar: Option<&image::Handle>) -> Element<'a, Message> {
    let avatar: Element<'_, Message> = match avatar {
        Some(handle) => image(handle.clone()).width(120).height(120).into(),
        // Placeholder until the avatar download lands
        None => icon("github").width(120).height(120).into(),
    };

    let stats = row![
        stat_tile(profile.public_repos, "Repositories"),
        stat_tile(profile.followers, "Followers"),
        stat_tile(profile.following, "Following"),
    ]
    .spacing(30);

    let mut details = column![].spacing(8);
    if let Some(location) = &profile.location {
        details = details.push(detail_row("location", location.clone()));
    }
    if let Some(company) = &profile.company {
        details = details.push(detail_row("company", company.clone()));
    }
    if let Some(joined) = profile.joined_date() {
        details = details.push(detail_row("calendar", format!("Joined {joined}")));
    }

    let actions = row![
        button("View Profile")
            .style(button::primary)
            .on_press_maybe(profile.html_url.clone().map(Message::ProfileLinkPressed)),
        button("Follow")
            .style(button::secondary)
            .on_press(Message::FollowPressed),
    ]
    .spacing(10);

    container(
        column![
            avatar,
            text(profile.display_name()).size(24),
            text(format!("@{}", profile.handle())),
            text(profile.bio_text()),
            stats,
            details,
            actions,
        ]
        .spacing(12)
        .align_x(Center),
    )
    .padding(30)
    .style(container::rounded_box)
    .into()
}

/// The panel shown before any search has happened.
pub fn welcome<'a>() -> Element<'a, Message> {
    container(
        column![
            text("Welcome to GitHub Profile Explorer").size(22),
            icon("github").width(80).height(80),
        ]
        .spacing(20)
        .align_x(Center),
    )
    .padding(30)
    .style(container::rounded_box)
    .into()
}

fn stat_tile<'a>(value: u32, label: &'a str) -> Element<'a, Message> {
    column![text(value.to_string()).size(24), text(label).size(12)]
        .align_x(Center)
        .into()
}

fn detail_row<'a>(icon_name: &str, value: String) -> Element<'a, Message> {
    row![icon(icon_name), text(value)]
        .spacing(8)
        .align_y(Center)
        .into()
}
