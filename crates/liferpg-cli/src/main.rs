use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "liferpg-cli", version, about = "LifeRPG CLI")]
struct Cli {
    /// Profile to operate on (defaults to `default_profile` from config)
    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Character profile management
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Quest log management
    Quest {
        #[command(subcommand)]
        action: commands::quest::QuestAction,
    },
    /// Day boundary control
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// XP history
    History {
        #[command(subcommand)]
        action: commands::history::HistoryAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Profile { action } => commands::profile::run(action, cli.profile),
        Commands::Quest { action } => commands::quest::run(action, cli.profile),
        Commands::Day { action } => commands::day::run(action, cli.profile),
        Commands::History { action } => commands::history::run(action, cli.profile),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
