mod app;
mod commands;
mod ui;

use app::error::CliError;
use clap::{Parser, Subcommand};
use commands::report::ReportCommand;
use commands::score::ScoreCommand;
use commands::validate::ValidateCommand;
use dotenv::dotenv;
use rbi_config::ConfigLoader;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rbi")]
#[command(about = "Risk-based inspection prioritization for pressure vessels", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (rbi.toml, rbi.json or rbi.yaml). Defaults to RBI_CONFIG or discovery.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one asset from its measurements
    Score(ScoreCommand),
    /// Score a vessel register and produce the prioritized report
    Report(ReportCommand),
    /// Check a vessel register without scoring it
    Validate(ValidateCommand),
}

fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();
    app::logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(cli_err) => cli_err.render(),
                None => ui::error(format!("{:#}", err)),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let loaded = ConfigLoader::new(cwd)
        .with_explicit(cli.config)
        .load()
        .map_err(CliError::from)?;

    if let Some(path) = &loaded.path {
        tracing::info!(path = %path.display(), "using configuration file");
    }

    match cli.command {
        Commands::Score(cmd) => cmd.execute(),
        Commands::Report(cmd) => cmd.execute(&loaded.config),
        Commands::Validate(cmd) => cmd.execute(loaded.config.strict),
    }
}
