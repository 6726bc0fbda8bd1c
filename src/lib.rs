//! tabprep library
//!
//! Backs up the invoice create page to a timestamped sibling file and prints
//! the plan for moving it to a tabbed interface.

pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod plan;
pub mod report;
pub mod types;

// Re-export main types for convenience
pub use backup::{
    BackupEntry, BackupMode, BackupOutcome, backup_file, backup_file_at, backup_path,
    list_backups,
};
pub use config::Config;
pub use error::{Result, TabprepError};
pub use plan::{Plan, print_plan, render_plan};
pub use report::{run, run_at};
pub use types::{BackupTimestamp, InvoiceTab};
