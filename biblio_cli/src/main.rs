mod menu;

use biblio_core::*;
use chrono::NaiveDate;
use clap::Parser;
use menu::Menu;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "biblio")]
#[command(about = "In-memory library management console", long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today for loans and fines
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Initialize logging
    biblio_core::logging::init_with_level(if cli.verbose { "debug" } else { "warn" });

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let policy = LoanPolicy::from(&config);
    tracing::debug!("Loan policy: {:?}", policy);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(Library::new(policy), stdin.lock(), stdout.lock())
        .with_today(cli.today)
        .run()
}
