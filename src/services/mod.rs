//! Service layer for budget-ledger
//!
//! The service layer drives the ledger model on behalf of callers: it plays
//! scenario files against fresh categories and feeds the audit log.

pub mod scenario;

pub use scenario::{Scenario, ScenarioOutcome, ScenarioRunner, Step, StepResult};
