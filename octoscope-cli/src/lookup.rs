use colored::Colorize;
use octoscope_lib::{Client, Error, Profile, Query};
use sysexits::ExitCode;

/// Perform one profile lookup and print the result.
pub async fn handle(raw: &str) -> ExitCode {
    let Some(query) = Query::parse(raw) else {
        eprintln!("{}", "Username must not be blank".red());
        return ExitCode::Usage;
    };

    let client = match Client::new() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            return ExitCode::Unavailable;
        }
    };

    match client.fetch_profile(&query).await {
        Ok(profile) => {
            print_profile(&profile);
            ExitCode::Ok
        }
        Err(err @ Error::NotFound) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::NoUser
        }
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::Unavailable
        }
    }
}

fn print_profile(profile: &Profile) {
    println!("{}", profile.display_name().bold());
    println!("{}", format!("@{}", profile.handle()).cyan());
    println!("{}", profile.bio_text());
    println!();
    println!(
        "{} repositories · {} followers · {} following",
        profile.public_repos, profile.followers, profile.following
    );

    if let Some(location) = &profile.location {
        println!("Location: {location}");
    }
    if let Some(company) = &profile.company {
        println!("Company: {company}");
    }
    if let Some(joined) = profile.joined_date() {
        println!("Joined {joined}");
    }
    if let Some(url) = &profile.html_url {
        println!("{}", url.underline());
    }
}
