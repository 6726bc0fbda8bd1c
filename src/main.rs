//! tabprep - main entry point
//!
//! With no subcommand: back up the invoice create page, print the tabbed
//! interface plan and the next steps.

use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error, info};

use tabprep::backup::{self, BackupMode};
use tabprep::cli::{Cli, Commands};
use tabprep::config::Config;
use tabprep::{logging, plan, report};

fn main() -> ExitCode {
    if let Err(e) = logging::init(logging::DEFAULT_LEVEL) {
        eprintln!("{e}");
    }

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed: {:?}", cli);

    match run_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("✗ {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let mut config = Config::resolve(cli.source.clone(), cli.config.as_deref())?;
    if cli.dry_run {
        info!("Dry-run mode enabled");
        config.mode = BackupMode::DryRun;
    }

    match cli.command() {
        Commands::Run => {
            let stdout = io::stdout();
            report::run(&config, &mut stdout.lock())?;
        }
        Commands::Backup => {
            let outcome = backup::backup_file(&config.source, config.mode)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            report::write_backup_outcome(&outcome, &mut out)?;
            out.flush()?;
        }
        Commands::Plan => {
            plan::print_plan()?;
        }
        Commands::List => {
            let entries = backup::list_backups(&config.source)?;
            let stdout = io::stdout();
            report::write_backup_list(&config.source, &entries, &mut stdout.lock())?;
        }
    }

    Ok(())
}
