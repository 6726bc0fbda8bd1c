use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{CONFIG_ENV, SOURCE_ENV};

/// tabprep - back up the invoice create page and print the tabs refactor plan
#[derive(Parser, Debug)]
#[command(name = "tabprep")]
#[command(about = "Backs up the invoice create page and prints the tabbed interface plan")]
#[command(version)]
pub struct Cli {
    /// File to back up (defaults to the invoice create page)
    #[arg(long, short, global = true, env = SOURCE_ENV)]
    pub source: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, short, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Dry-run mode: report the backup path without writing anything.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Back up the source, print the plan and next steps (default)
    Run,
    /// Only back up the source file
    Backup,
    /// Only print the implementation plan
    Plan,
    /// List existing backups of the source file
    List,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Subcommand to run; no subcommand means the full run
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_args_is_full_run() {
        let cli = Cli::try_parse_from(["tabprep"]).expect("parse");
        assert_eq!(cli.command(), Commands::Run);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tabprep",
            "backup",
            "--source",
            "/tmp/page.tsx",
            "--dry-run",
        ])
        .expect("parse");
        assert_eq!(cli.command(), Commands::Backup);
        assert_eq!(cli.source, Some(PathBuf::from("/tmp/page.tsx")));
        assert!(cli.dry_run);
    }

    #[test]
    fn test_cli_list_with_config() {
        let cli = Cli::try_parse_from(["tabprep", "-c", "tabprep.json", "list"]).expect("parse");
        assert_eq!(cli.command(), Commands::List);
        assert_eq!(cli.config, Some(PathBuf::from("tabprep.json")));
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["tabprep", "migrate"]).is_err());
    }
}
