//! CLI command handler for the audit log
//!
//! Prints the most recent audited ledger operations.

use clap::Args;

use crate::audit::AuditLogger;
use crate::config::LedgerPaths;
use crate::error::LedgerResult;

/// Arguments of the `audit` command
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle the audit command
pub fn handle_audit_command(paths: &LedgerPaths, args: AuditArgs) -> LedgerResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No audit entries found.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry);
    }

    Ok(())
}
