mod platform;

use std::path::PathBuf;

use clap::Parser;

use platform::logging::LogDestination;

/// Console dashboard for transcribing videos and scraping forum posts.
#[derive(Debug, Parser)]
#[command(name = "taskdeck", version)]
struct Cli {
    /// RON configuration file; defaults apply when it does not exist.
    #[arg(long, default_value = "taskdeck.ron")]
    config: PathBuf,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    log: LogDestination,

    /// Also log debug traces (task transitions, ignored intents).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    platform::logging::initialize(cli.log, cli.verbose);
    let config = platform::config::load(&cli.config)?;
    platform::app::run_app(config)
}
