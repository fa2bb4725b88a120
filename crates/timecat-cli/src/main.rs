use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "timecat-cli", version, about = "Weekly meeting time by category")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily and weekly time per category
    Week(commands::week::WeekCommand),
    /// Detailed list of which meeting landed in which category
    Report(commands::report::ReportCommand),
    /// Explain how a single meeting would be categorized
    Categorize(commands::categorize::CategorizeCommand),
    /// Show the effective keyword table
    Keywords(commands::keywords::KeywordsCommand),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Week(cmd) => commands::week::run(cmd),
        Commands::Report(cmd) => commands::report::run(cmd),
        Commands::Categorize(cmd) => commands::categorize::run(cmd),
        Commands::Keywords(cmd) => commands::keywords::run(cmd),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
