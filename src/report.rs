//! Console flow: banner, backup, plan, next steps.
//!
//! Every writer takes `&mut impl Write` so the whole run can be captured in
//! tests; the binary hands in a locked stdout.

use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::backup::{self, BackupEntry, BackupOutcome};
use crate::config::Config;
use crate::error::Result;
use crate::plan::{self, Plan};
use crate::types::BackupTimestamp;

/// Width of the `=` rule between sections
pub const SEPARATOR_WIDTH: usize = 60;

pub const BANNER: &str = "🚀 Invoice Create Page - Tabbed Interface Setup";

pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

pub fn write_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n{BANNER}\n")?;
    Ok(())
}

/// Outcome line, plus the confirmation block when a backup was written.
pub fn write_backup_outcome<W: Write>(outcome: &BackupOutcome, out: &mut W) -> Result<()> {
    writeln!(out, "{}", outcome.message())?;
    match outcome {
        BackupOutcome::Created { destination, .. } => {
            writeln!(out, "\n✅ Backup complete!")?;
            writeln!(out, "📁 Backup location: {}", destination.display())?;
        }
        BackupOutcome::Planned { .. } => {
            writeln!(out, "\n🔍 Dry run: no files were written")?;
        }
        BackupOutcome::SourceMissing { .. } => {}
    }
    Ok(())
}

pub fn write_footer<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    writeln!(out, "\n💡 NEXT STEPS:")?;
    writeln!(out, "1. Review the implementation plan above")?;
    writeln!(
        out,
        "2. Check {} for detailed code",
        config.implementation_doc
    )?;
    writeln!(out, "3. Apply changes systematically")?;
    writeln!(out, "4. Test each tab individually")?;
    writeln!(out, "\nGood luck! 🎉\n")?;
    Ok(())
}

/// Existing backups of `source`, one per line, oldest first.
pub fn write_backup_list<W: Write>(
    source: &Path,
    entries: &[BackupEntry],
    out: &mut W,
) -> Result<()> {
    if entries.is_empty() {
        writeln!(out, "No backups found for {}", source.display())?;
        return Ok(());
    }
    writeln!(out, "📁 Backups of {}:", source.display())?;
    for entry in entries {
        writeln!(out, "  {}  {}", entry.timestamp, entry.path.display())?;
    }
    Ok(())
}

/// Full run using the current local time for the backup name.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<BackupOutcome> {
    run_at(config, BackupTimestamp::now(), out)
}

/// Full run with a fixed backup timestamp.
///
/// A missing source is reported and the plan is still printed. A copy
/// failure stops the run before the plan.
pub fn run_at<W: Write>(
    config: &Config,
    timestamp: BackupTimestamp,
    out: &mut W,
) -> Result<BackupOutcome> {
    info!("Starting setup run for {}", config.source.display());

    write_banner(out)?;
    writeln!(out, "{}", separator())?;

    let outcome = backup::backup_file_at(&config.source, timestamp, config.mode)?;
    write_backup_outcome(&outcome, out)?;

    writeln!(out, "\n{}", separator())?;
    plan::render_plan(&Plan::invoice_tabs(), out)?;
    writeln!(out)?;
    writeln!(out, "{}", separator())?;

    write_footer(config, out)?;
    out.flush()?;

    info!("Setup run finished (backup succeeded: {})", outcome.succeeded());
    Ok(outcome)
}
