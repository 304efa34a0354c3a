use clap::Parser;
use sysexits::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod lookup;

#[derive(Parser, Debug)]
#[command(name = "octoscope")]
#[command(author, version, about)]
struct Cli {
    /// GitHub username to look up
    username: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    human_panic::setup_panic!();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let cli = Cli::parse();

    lookup::handle(&cli.username).await
}
