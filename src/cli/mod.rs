//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod run;

pub use audit::{handle_audit_command, AuditArgs};
pub use run::{handle_demo_command, handle_run_command, OutputOptions, RunArgs};
